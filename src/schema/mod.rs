//! Schema model
//!
//! The synthesized output tree and the policy that folds alternative
//! shapes into one node.
//!
//! # Features
//!
//! - **Schema Nodes**: Types, unions, properties, items, records, bounds
//! - **Two Nullability Dialects**: `nullable: true` or an explicit `null` member
//! - **Shape Merging**: Zero, one or many branches into a single node

mod merge;
mod types;

pub use merge::{merge, MergeOutcome, Merged};
pub use types::{JsonType, JsonTypeOrArray, Schema};
