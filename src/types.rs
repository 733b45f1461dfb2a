//! Common types used throughout schema-miner
//!
//! This module contains the declared type vocabulary shared by the
//! primitive synthesizer and the constraint miner, the nullability
//! dialect switch, and a few type aliases.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Dialect
// ============================================================================

/// How a synthesized schema says "this may also be null"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// Sibling `nullable: true` flag (OpenAPI 3.0 / pre-2020 JSON Schema)
    #[default]
    #[serde(rename = "openapi-3.0")]
    OpenApi30,
    /// Explicit `null` in the type union or `oneOf` set (OpenAPI 3.1)
    #[serde(rename = "openapi-3.1")]
    OpenApi31,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::OpenApi30 => write!(f, "openapi-3.0"),
            Dialect::OpenApi31 => write!(f, "openapi-3.1"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openapi-3.0" | "3.0" | "nullable" => Ok(Dialect::OpenApi30),
            "openapi-3.1" | "3.1" | "null-union" => Ok(Dialect::OpenApi31),
            other => Err(Error::invalid_config(
                "dialect",
                format!("expected 'openapi-3.0' or 'openapi-3.1', got '{other}'"),
            )),
        }
    }
}

// ============================================================================
// Declared Types
// ============================================================================

/// Element type of a declared `list of X`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Boolean,
    Integer,
    String,
    Float,
    Timestamp,
}

impl ElementType {
    /// The scalar declared type each element is synthesized as
    pub fn doc_type(self) -> DocType {
        match self {
            ElementType::Boolean => DocType::Boolean,
            ElementType::Integer => DocType::Numeric,
            ElementType::String => DocType::String,
            ElementType::Float => DocType::Float,
            ElementType::Timestamp => DocType::Timestamp,
        }
    }
}

/// A declared primitive type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocType {
    String,
    Numeric,
    Float,
    Boolean,
    /// Non-negative integer seconds, kept distinct from `Numeric`
    Timestamp,
    /// Free-form map whose values are inferred from samples
    AssociativeArray,
    /// Opaque object, never constrained further
    Object,
    ListOf(ElementType),
}

impl DocType {
    /// Parse a declared tag such as `numeric` or `list of integers`
    ///
    /// Separators are normalized, so `associative-array`,
    /// `associative array` and `list-of-strings` are all accepted.
    pub fn parse(tag: &str) -> Result<Self> {
        let normalized = tag
            .trim()
            .to_lowercase()
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if let Some(element) = normalized.strip_prefix("list of ") {
            let element = match element {
                "booleans" => ElementType::Boolean,
                "integers" => ElementType::Integer,
                "strings" => ElementType::String,
                "floats" => ElementType::Float,
                "timestamps" => ElementType::Timestamp,
                other => return Err(Error::unsupported_list_element(other)),
            };
            return Ok(DocType::ListOf(element));
        }

        match normalized.as_str() {
            "string" => Ok(DocType::String),
            "numeric" => Ok(DocType::Numeric),
            "float" => Ok(DocType::Float),
            "boolean" => Ok(DocType::Boolean),
            "timestamp" => Ok(DocType::Timestamp),
            "associative array" => Ok(DocType::AssociativeArray),
            "object" => Ok(DocType::Object),
            _ => Err(Error::unknown_doc_type(tag)),
        }
    }

    /// Whether this tag holds whole numbers
    pub fn is_integral(self) -> bool {
        matches!(self, DocType::Numeric | DocType::Timestamp)
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocType::String => write!(f, "string"),
            DocType::Numeric => write!(f, "numeric"),
            DocType::Float => write!(f, "float"),
            DocType::Boolean => write!(f, "boolean"),
            DocType::Timestamp => write!(f, "timestamp"),
            DocType::AssociativeArray => write!(f, "associative-array"),
            DocType::Object => write!(f, "object"),
            DocType::ListOf(element) => {
                let name = match element {
                    ElementType::Boolean => "booleans",
                    ElementType::Integer => "integers",
                    ElementType::String => "strings",
                    ElementType::Float => "floats",
                    ElementType::Timestamp => "timestamps",
                };
                write!(f, "list-of-{name}")
            }
        }
    }
}
