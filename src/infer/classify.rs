//! Value classifier
//!
//! Decides which structural shape a single sample takes relative to a
//! declared group. The hard case is a keyed mapping, which can be the
//! declared object itself (complete or sparse) or a record whose keys are
//! external identifiers and whose values are each an instance of the group.

use crate::spec::FieldSpec;
use crate::types::JsonObject;
use serde_json::Value;

/// Structural shape of one sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Null,
    /// A sequence whose elements are instances of the group
    ArrayOfGroup,
    /// Some but not all declared fields present
    FixedObject {
        /// Declared names absent from the sample
        missing: Vec<String>,
    },
    /// All declared fields present
    ExtendedObject {
        /// Sample keys the declaration does not name
        surplus: Vec<String>,
    },
    /// Keys are identifiers; every value is an instance of the group
    Record,
    /// A scalar where an object or array was declared
    Unexpected,
}

impl Shape {
    /// Whether the sample is synthesized as the declared object
    pub fn is_object(&self) -> bool {
        matches!(self, Shape::FixedObject { .. } | Shape::ExtendedObject { .. })
    }
}

/// Classify `sample` against the declared children of a group
pub fn classify(fields: &[FieldSpec], sample: &Value) -> Shape {
    match sample {
        Value::Null => Shape::Null,
        Value::Array(_) => Shape::ArrayOfGroup,
        Value::Object(map) => classify_object(fields, map),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Unexpected,
    }
}

fn classify_object(fields: &[FieldSpec], map: &JsonObject) -> Shape {
    let missing: Vec<String> = fields
        .iter()
        .filter(|f| !map.contains_key(&f.name))
        .map(|f| f.name.clone())
        .collect();

    if missing.is_empty() {
        let surplus = map
            .keys()
            .filter(|key| !fields.iter().any(|f| &f.name == *key))
            .cloned()
            .collect();
        return Shape::ExtendedObject { surplus };
    }

    // Some declared names present. Only a record if every value is itself a
    // complete instance, i.e. the keys merely collide with declared names.
    let any_present = missing.len() < fields.len();
    if any_present && !map.values().all(|value| is_complete_instance(fields, value)) {
        return Shape::FixedObject { missing };
    }

    Shape::Record
}

fn is_complete_instance(fields: &[FieldSpec], value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| fields.iter().all(|f| obj.contains_key(&f.name)))
}
