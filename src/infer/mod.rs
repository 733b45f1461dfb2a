//! Structural inference engine
//!
//! Reconciles declared fields with recorded samples and synthesizes one
//! schema per field.
//!
//! # Features
//!
//! - **Shape Classification**: Null, array, fixed or extended object, record
//! - **Group Synthesis**: One branch per observed shape, recursing with the same declaration
//! - **Primitive Synthesis**: Declared tags, `list of X`, free-form associative arrays
//! - **Nullability**: Any observed `null` makes the node accept `null`
//! - **Diagnostics**: Non-fatal evidence problems returned and logged
//!
//! ```rust
//! use schema_miner::infer::Synthesizer;
//! use schema_miner::spec::FieldSpec;
//! use serde_json::json;
//!
//! let spec = FieldSpec::group("ticker", vec![
//!     FieldSpec::primitive("bid", "float"),
//!     FieldSpec::primitive("ask", "float"),
//! ]);
//! let samples = vec![json!({"bid": 1.5, "ask": 1.6}), json!(null)];
//!
//! let field = Synthesizer::default().synthesize_field(&spec, &samples).unwrap();
//! assert_eq!(field.schema.nullable, Some(true));
//! ```

mod classify;
mod diagnostics;
mod field;
mod group;
mod pass;
mod primitive;

pub use classify::{classify, Shape};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use field::{synthesize_field, Synthesized, SynthesizedField, Synthesizer};
