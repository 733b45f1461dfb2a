//! Field specification module
//!
//! Declared output fields of an endpoint, as loaded from YAML or JSON.
//!
//! # Overview
//!
//! - `FieldSpec` - a named primitive or group declaration
//! - `FieldKind` - the primitive/group split
//! - Loading with name validation

mod parser;
mod types;

pub use parser::{load_fields, load_fields_from_str};
pub use types::{FieldKind, FieldSpec};
