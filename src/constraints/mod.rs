//! Parameter constraint mining
//!
//! Extracts bounds, enumerations and defaults from the free-text
//! documentation of declared input parameters. This is a text heuristic:
//! it never sees samples and never fails, text it cannot read simply
//! stays in the description.
//!
//! # Recognized idioms
//!
//! - A `Valid values:` block of `- "value" - description` bullets
//! - `Minimum: N`, `Maximum value is N`
//! - `Default: V`, `Defaults to V`
//! - `Returns at most N ..., capped at M`

mod miner;

pub use miner::{mine_declared_parameter, mine_parameter_constraints, MinedParameter};

#[cfg(test)]
mod tests;
