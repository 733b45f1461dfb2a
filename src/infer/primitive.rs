//! Primitive synthesizer
//!
//! Declared tags map to fixed schema types. Only three tags look at the
//! samples beyond nullability: `list of X` recurses into the flattened
//! elements, `associative-array` infers its value schema, and every tag
//! turns nullable when a `null` was observed.

use super::diagnostics::DiagnosticKind;
use super::pass::{kind_name, Pass};
use crate::schema::{JsonType, Schema};
use crate::types::{DocType, ElementType};
use serde_json::Value;
use std::collections::BTreeMap;

impl Pass<'_> {
    pub(super) fn primitive(&mut self, doc_type: DocType, samples: &[&Value]) -> Schema {
        let present: Vec<&Value> = samples.iter().copied().filter(|v| !v.is_null()).collect();
        let saw_null = present.len() < samples.len();

        let mut schema = match doc_type {
            DocType::AssociativeArray => self.associative_array(&present),
            DocType::ListOf(element) => self.list_of(element, &present),
            scalar => Schema::for_doc_type(scalar),
        };

        if saw_null {
            schema.make_nullable(self.options.dialect);
        }
        schema
    }

    fn list_of(&mut self, element: ElementType, samples: &[&Value]) -> Schema {
        let mut pool = Vec::new();
        for sample in samples {
            match sample {
                Value::Array(items) => pool.extend(items.iter()),
                other => self.diagnose(
                    DiagnosticKind::UnexpectedValue,
                    format!("expected an array, got {}", kind_name(other)),
                ),
            }
        }

        let items = self.nested("[]", |pass| pass.primitive(element.doc_type(), &pool));
        Schema::array(items)
    }

    fn associative_array(&mut self, samples: &[&Value]) -> Schema {
        let mut pool = Vec::new();
        for sample in samples {
            match sample {
                Value::Object(map) => pool.extend(map.values()),
                other => self.diagnose(
                    DiagnosticKind::UnexpectedValue,
                    format!("expected an object, got {}", kind_name(other)),
                ),
            }
        }

        let values = self.nested("{}", |pass| pass.free_form(&pool));
        Schema::map_of(values)
    }

    /// Infer an undeclared value pool from the samples alone
    ///
    /// Branch order is fixed (array, object, boolean, number, string) so
    /// repeated runs produce the same `oneOf`.
    pub(super) fn free_form(&mut self, values: &[&Value]) -> Schema {
        let mut saw_null = false;
        let mut saw_bool = false;
        let mut saw_string = false;
        let mut number: Option<JsonType> = None;
        let mut arrays: Option<Vec<&Value>> = None;
        let mut objects: Option<Vec<&serde_json::Map<String, Value>>> = None;

        for value in values {
            match value {
                Value::Null => saw_null = true,
                Value::Bool(_) => saw_bool = true,
                Value::String(_) => saw_string = true,
                Value::Number(n) => {
                    // Integer widens to number once a fraction shows up
                    let this = if n.is_i64() || n.is_u64() {
                        JsonType::Integer
                    } else {
                        JsonType::Number
                    };
                    number = Some(match number {
                        Some(JsonType::Number) => JsonType::Number,
                        _ => this,
                    });
                }
                Value::Array(items) => arrays.get_or_insert_with(Vec::new).extend(items.iter()),
                Value::Object(map) => objects.get_or_insert_with(Vec::new).push(map),
            }
        }

        let mut branches = Vec::new();
        if let Some(elements) = arrays {
            let items = self.nested("[]", |pass| pass.free_form(&elements));
            branches.push(Schema::array(items));
        }
        if let Some(maps) = objects {
            branches.push(self.free_form_object(&maps));
        }
        if saw_bool {
            branches.push(Schema::new(JsonType::Boolean));
        }
        if let Some(json_type) = number {
            branches.push(Schema::new(json_type));
        }
        if saw_string {
            branches.push(Schema::new(JsonType::String));
        }

        self.merge(branches, saw_null)
    }

    /// Merge objects key by key; keys seen in every object are required
    fn free_form_object(&mut self, maps: &[&serde_json::Map<String, Value>]) -> Schema {
        let mut pools: BTreeMap<&str, Vec<&Value>> = BTreeMap::new();
        for map in maps {
            for (key, value) in *map {
                pools.entry(key.as_str()).or_default().push(value);
            }
        }

        let mut properties = BTreeMap::new();
        let mut required = Vec::new();
        for (key, pool) in pools {
            if pool.len() == maps.len() {
                required.push(key.to_string());
            }
            let schema = self.nested(key, |pass| pass.free_form(&pool));
            properties.insert(key.to_string(), schema);
        }

        Schema::object(properties, required)
    }
}
