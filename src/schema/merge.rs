//! Shape merge policy
//!
//! Folds the per-shape branches synthesized for one position into a single
//! node. `null` is never a structural branch here: it only flips the
//! nullability of whatever the branches merge into.

use super::types::Schema;
use crate::types::Dialect;

/// How many branches went into a merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No branch at all; the caller should report insufficient evidence
    Empty,
    Single,
    /// A `oneOf` over this many branches; the caller should report ambiguity
    Multiple(usize),
}

/// Result of merging branches
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    pub schema: Schema,
    pub outcome: MergeOutcome,
}

/// Merge zero, one or many branch schemas into one node
pub fn merge(mut branches: Vec<Schema>, saw_null: bool, dialect: Dialect) -> Merged {
    let (mut schema, outcome) = match branches.len() {
        0 => {
            // `{}` already admits null under 3.1; 3.0 needs the flag spelled out.
            let mut schema = Schema::any();
            if saw_null && dialect == Dialect::OpenApi30 {
                schema.make_nullable(dialect);
            }
            return Merged {
                schema,
                outcome: MergeOutcome::Empty,
            };
        }
        1 => (branches.remove(0), MergeOutcome::Single),
        n => (Schema::one_of(branches), MergeOutcome::Multiple(n)),
    };

    if saw_null {
        schema.make_nullable(dialect);
    }

    Merged { schema, outcome }
}
