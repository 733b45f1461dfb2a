//! Schema types

use crate::types::{Dialect, DocType};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
            JsonType::Null => write!(f, "null"),
        }
    }
}

/// JSON type can be a single type or array of types (for nullable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonTypeOrArray {
    Single(JsonType),
    Multiple(Vec<JsonType>),
}

impl JsonTypeOrArray {
    /// Check if this type admits null
    pub fn is_nullable(&self) -> bool {
        match self {
            JsonTypeOrArray::Single(t) => *t == JsonType::Null,
            JsonTypeOrArray::Multiple(types) => types.contains(&JsonType::Null),
        }
    }

    /// Get the primary (non-null) type
    pub fn primary_type(&self) -> Option<JsonType> {
        match self {
            JsonTypeOrArray::Single(t) => Some(*t),
            JsonTypeOrArray::Multiple(types) => types.iter().copied().find(|t| *t != JsonType::Null),
        }
    }

    /// Add `null` to the union
    pub fn make_nullable(&self) -> Self {
        if self.is_nullable() {
            return self.clone();
        }
        match self {
            JsonTypeOrArray::Single(t) => JsonTypeOrArray::Multiple(vec![*t, JsonType::Null]),
            JsonTypeOrArray::Multiple(types) => {
                let mut types = types.clone();
                types.push(JsonType::Null);
                JsonTypeOrArray::Multiple(types)
            }
        }
    }
}

/// A synthesized schema node
///
/// `Schema::default()` is the empty, unconstrained schema `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Node type(s); absent for `{}` and pure `oneOf` nodes
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub json_type: Option<JsonTypeOrArray>,

    /// Format hint (e.g. "float")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// OpenAPI 3.0 nullability flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Fixed-key object properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Schema of every value of a record or associative array
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<Box<Schema>>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Alternative shapes
    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,
}

impl Schema {
    /// Create a node with the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type: Some(JsonTypeOrArray::Single(json_type)),
            ..Default::default()
        }
    }

    /// Schema a declared tag implies before any evidence is looked at
    pub fn for_doc_type(doc_type: DocType) -> Self {
        match doc_type {
            DocType::String => Self::new(JsonType::String),
            DocType::Numeric => Self::new(JsonType::Integer),
            DocType::Timestamp => Self::new(JsonType::Integer).with_minimum(0u64),
            DocType::Float => Self::new(JsonType::Number).with_format("float"),
            DocType::Boolean => Self::new(JsonType::Boolean),
            DocType::Object => Self::new(JsonType::Object),
            DocType::AssociativeArray => Self::map_of(Self::any()),
            DocType::ListOf(element) => Self::array(Self::for_doc_type(element.doc_type())),
        }
    }

    /// The empty, unconstrained schema `{}`
    pub fn any() -> Self {
        Self::default()
    }

    /// Create an object node over fixed properties
    pub fn object(properties: BTreeMap<String, Schema>, required: Vec<String>) -> Self {
        Self {
            properties: Some(properties),
            required: if required.is_empty() {
                None
            } else {
                Some(required)
            },
            ..Self::new(JsonType::Object)
        }
    }

    /// Create an object node whose every value matches `values`
    pub fn map_of(values: Schema) -> Self {
        Self {
            additional_properties: Some(Box::new(values)),
            ..Self::new(JsonType::Object)
        }
    }

    /// Create an array node with item schema
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(JsonType::Array)
        }
    }

    /// Create a union of alternative shapes
    pub fn one_of(branches: Vec<Schema>) -> Self {
        Self {
            one_of: Some(branches),
            ..Default::default()
        }
    }

    /// Set format hint
    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set lower bound
    #[must_use]
    pub fn with_minimum(mut self, minimum: impl Into<Number>) -> Self {
        self.minimum = Some(minimum.into());
        self
    }

    /// Check if this is the unconstrained schema `{}`
    pub fn is_any(&self) -> bool {
        *self == Self::default()
    }

    /// The node's primary (non-null) type, if it has one
    pub fn primary_type(&self) -> Option<JsonType> {
        self.json_type.as_ref().and_then(JsonTypeOrArray::primary_type)
    }

    /// Mark this node as accepting `null`, encoded per `dialect`
    ///
    /// Under OpenAPI 3.1 a typed node gains `null` in its type union and a
    /// `oneOf` node gains a `{type: "null"}` alternative. A node that is
    /// neither typed nor a union already accepts `null` there.
    pub fn make_nullable(&mut self, dialect: Dialect) {
        match dialect {
            Dialect::OpenApi30 => self.nullable = Some(true),
            Dialect::OpenApi31 => {
                if let Some(branches) = self.one_of.as_mut() {
                    if !branches.iter().any(Schema::is_null_type) {
                        branches.push(Schema::new(JsonType::Null));
                    }
                } else if let Some(json_type) = &self.json_type {
                    self.json_type = Some(json_type.make_nullable());
                }
            }
        }
    }

    /// Check whether this node accepts `null` under `dialect`
    pub fn is_nullable(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::OpenApi30 => self.nullable == Some(true),
            Dialect::OpenApi31 => match (&self.one_of, &self.json_type) {
                (Some(branches), _) => branches.iter().any(Schema::is_null_type),
                (None, Some(json_type)) => json_type.is_nullable(),
                (None, None) => true,
            },
        }
    }

    fn is_null_type(&self) -> bool {
        self.json_type == Some(JsonTypeOrArray::Single(JsonType::Null))
    }

    /// Get a property
    pub fn get_property(&self, name: &str) -> Option<&Schema> {
        self.properties.as_ref().and_then(|props| props.get(name))
    }

    /// Check if a property is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|required| required.iter().any(|r| r == name))
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
