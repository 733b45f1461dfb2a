//! CLI module
//!
//! Command-line interface for schema synthesis.
//!
//! # Commands
//!
//! - `infer` - Synthesize an endpoint's output schema from samples
//! - `params` - Mine parameter constraints from help text

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
