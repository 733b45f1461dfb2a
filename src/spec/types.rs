//! Declared field specification types

use serde::{Deserialize, Serialize};

/// One declared field of an endpoint's output
///
/// ```yaml
/// name: orders
/// help: Open orders keyed by order id
/// fields:
///   - name: price
///     type: float
///   - name: flags
///     type: list of strings
///     help: "(extra field) Order flags"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique among siblings
    pub name: String,

    /// Free-text documentation; may carry the extra-field marker
    #[serde(default, alias = "helpText", alias = "help_text")]
    pub help: String,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(
        default,
        alias = "deprecatedText",
        skip_serializing_if = "Option::is_none"
    )]
    pub deprecated_text: Option<String>,

    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Primitive or group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldKind {
    /// Nested field list; samples may be an object, an array of such
    /// objects, or a record keyed by identifiers
    Group { fields: Vec<FieldSpec> },
    /// Declared primitive tag, kept verbatim until synthesis
    Primitive {
        #[serde(rename = "type", alias = "docType")]
        doc_type: String,
    },
}

impl FieldSpec {
    /// Create a primitive field
    pub fn primitive(name: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: String::new(),
            deprecated: false,
            deprecated_text: None,
            kind: FieldKind::Primitive {
                doc_type: doc_type.into(),
            },
        }
    }

    /// Create a group field
    pub fn group(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            help: String::new(),
            deprecated: false,
            deprecated_text: None,
            kind: FieldKind::Group { fields },
        }
    }

    /// Set help text
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Mark as deprecated
    #[must_use]
    pub fn with_deprecation(mut self, text: Option<&str>) -> Self {
        self.deprecated = true;
        self.deprecated_text = text.map(str::to_string);
        self
    }

    /// Child fields, if this is a group
    pub fn fields(&self) -> Option<&[FieldSpec]> {
        match &self.kind {
            FieldKind::Group { fields } => Some(fields),
            FieldKind::Primitive { .. } => None,
        }
    }

    /// Whether the help text declares this field optional
    pub fn is_extra(&self, marker: &str) -> bool {
        self.help.contains(marker)
    }

    /// Help text with the extra-field marker removed and whitespace tidied
    pub fn description(&self, marker: &str) -> Option<String> {
        let text = self
            .help
            .replace(marker, " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
