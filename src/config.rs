//! Synthesis options
//!
//! Everything that varies between conversion runs lives here: the
//! nullability dialect, the help-text marker that declares a field
//! optional, and where the `data` subtree sits in a recorded body.

use crate::error::{Error, Result};
use crate::types::Dialect;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Marker used when none is configured
pub const DEFAULT_EXTRA_FIELD_MARKER: &str = "(extra field)";

/// Options for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Nullability encoding applied to every node
    #[serde(default)]
    pub dialect: Dialect,

    /// Help-text marker meaning "declared optional"
    #[serde(default = "default_extra_field_marker")]
    pub extra_field_marker: String,

    /// Dotted path of the declared fields inside a recorded body
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

fn default_extra_field_marker() -> String {
    DEFAULT_EXTRA_FIELD_MARKER.to_string()
}

fn default_data_path() -> String {
    "data".to_string()
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            extra_field_marker: default_extra_field_marker(),
            data_path: default_data_path(),
        }
    }
}

impl SynthesisOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialect
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the extra-field marker
    #[must_use]
    pub fn with_extra_field_marker(mut self, marker: &str) -> Self {
        self.extra_field_marker = marker.to_string();
        self
    }

    /// Set the data path
    #[must_use]
    pub fn with_data_path(mut self, path: &str) -> Self {
        self.data_path = path.to_string();
        self
    }

    /// Load options from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read options file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load options from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: SynthesisOptions = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.extra_field_marker.trim().is_empty() {
            return Err(Error::invalid_config(
                "extra_field_marker",
                "marker cannot be empty",
            ));
        }
        if self.data_path.split('.').any(str::is_empty) && !self.data_path.is_empty() {
            return Err(Error::invalid_config(
                "data_path",
                format!("'{}' has an empty segment", self.data_path),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SynthesisOptions::default();
        assert_eq!(options.dialect, Dialect::OpenApi30);
        assert_eq!(options.extra_field_marker, "(extra field)");
        assert_eq!(options.data_path, "data");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let options = SynthesisOptions::from_yaml_str("dialect: openapi-3.1\n").unwrap();
        assert_eq!(options.dialect, Dialect::OpenApi31);
        assert_eq!(options.extra_field_marker, DEFAULT_EXTRA_FIELD_MARKER);
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
dialect: openapi-3.0
extra_field_marker: "[optional]"
data_path: result.payload
"#;
        let options = SynthesisOptions::from_yaml_str(yaml).unwrap();
        assert_eq!(options.extra_field_marker, "[optional]");
        assert_eq!(options.data_path, "result.payload");
    }

    #[test]
    fn test_empty_marker_rejected() {
        let err = SynthesisOptions::from_yaml_str("extra_field_marker: \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("extra_field_marker"));
    }

    #[test]
    fn test_bad_data_path_rejected() {
        assert!(SynthesisOptions::new().with_data_path("a..b").validate().is_err());
        // Empty path means "the whole body"
        assert!(SynthesisOptions::new().with_data_path("").validate().is_ok());
    }

    #[test]
    fn test_unknown_dialect_rejected() {
        assert!(SynthesisOptions::from_yaml_str("dialect: swagger-2\n").is_err());
    }
}
