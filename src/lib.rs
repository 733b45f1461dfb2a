// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # schema-miner
//!
//! Synthesizes JSON Schemas for API endpoints from two sources of
//! evidence: the fields an endpoint declares in its documentation, and
//! response bodies recorded by its tests.
//!
//! ## Features
//!
//! - **Structural Inference**: Arrays, fixed-key objects and records told apart per sample
//! - **Declared Types**: `string`, `numeric`, `float`, `timestamp`, `list of X` and more
//! - **Nullability**: OpenAPI 3.0 `nullable` or OpenAPI 3.1 type unions
//! - **Constraint Mining**: Enums, bounds and defaults lifted from parameter help text
//! - **Diagnostics**: Evidence problems reported with the dotted path they concern
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_miner::{load_fields_from_str, SynthesisOptions, Synthesizer};
//! use serde_json::json;
//!
//! let fields = load_fields_from_str(r#"
//! - name: pair
//!   type: string
//! - name: volume
//!   type: float
//! "#).unwrap();
//!
//! let data = vec![json!({"pair": "XBTUSD", "volume": 1.5})];
//! let out = Synthesizer::new(SynthesisOptions::default())
//!     .synthesize_output(&fields, &data)
//!     .unwrap();
//!
//! assert_eq!(out.schema.required, Some(vec!["pair".into(), "volume".into()]));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                              CLI                                │
//! │   infer: fields + samples → schema    params: help → schema     │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────┬───────────┬──────┴──────┬─────────────┬─────────────┐
//! │   Spec    │  Corpus   │    Infer    │ Constraints │   Schema    │
//! ├───────────┼───────────┼─────────────┼─────────────┼─────────────┤
//! │ Fields    │ Bodies    │ Classify    │ Valid values│ Nodes       │
//! │ Groups    │ Project   │ Group       │ Min / Max   │ Merge       │
//! │ Markers   │           │ Primitive   │ Default     │ Nullability │
//! └───────────┴───────────┴─────────────┴─────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Synthesis options
pub mod config;

/// Declared output fields
pub mod spec;

/// Schema nodes and branch merging
pub mod schema;

/// Structural inference from samples
pub mod infer;

/// Constraint mining from parameter help text
pub mod constraints;

/// Recorded response bodies
pub mod corpus;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::SynthesisOptions;
pub use constraints::{mine_declared_parameter, mine_parameter_constraints, MinedParameter};
pub use infer::{synthesize_field, Diagnostic, DiagnosticKind, Synthesized, SynthesizedField, Synthesizer};
pub use schema::Schema;
pub use spec::{load_fields, load_fields_from_str, FieldKind, FieldSpec};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
