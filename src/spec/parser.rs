//! Field specification parser
//!
//! Parses and validates declared field lists from YAML or JSON.

use crate::error::{Error, Result};
use crate::spec::types::FieldSpec;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a declared field list from a YAML or JSON file
pub fn load_fields(path: impl AsRef<Path>) -> Result<Vec<FieldSpec>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read field specification '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_fields_from_str(&content)
}

/// Load a declared field list from a YAML (or JSON) string
pub fn load_fields_from_str(text: &str) -> Result<Vec<FieldSpec>> {
    let fields: Vec<FieldSpec> = serde_yaml::from_str(text)
        .map_err(|e| Error::field_spec(format!("Failed to parse field list: {e}")))?;

    validate_fields(&fields, "")?;
    Ok(fields)
}

/// Validate names recursively; declared types are checked at synthesis
fn validate_fields(fields: &[FieldSpec], parent: &str) -> Result<()> {
    let mut seen = HashSet::new();

    for field in fields {
        if field.name.trim().is_empty() {
            return Err(Error::field_spec(if parent.is_empty() {
                "Field name cannot be empty".to_string()
            } else {
                format!("Field name cannot be empty under '{parent}'")
            }));
        }

        let path = if parent.is_empty() {
            field.name.clone()
        } else {
            format!("{parent}.{}", field.name)
        };

        if !seen.insert(field.name.as_str()) {
            return Err(Error::field_spec(format!("Duplicate field name '{path}'")));
        }

        if let Some(children) = field.fields() {
            validate_fields(children, &path)?;
        }
    }

    Ok(())
}
