//! Group synthesizer
//!
//! Partitions a group's samples by shape and builds one branch per
//! non-empty partition. Arrays and records recurse with the very same
//! declared fields one level down in the samples, never in the spec.

use super::classify::{classify, Shape};
use super::diagnostics::DiagnosticKind;
use super::pass::{kind_name, Pass};
use crate::error::Result;
use crate::schema::Schema;
use crate::spec::FieldSpec;
use crate::types::JsonObject;
use serde_json::Value;
use std::collections::BTreeMap;

/// Samples of one group, bucketed by shape
#[derive(Default)]
struct Partition<'v> {
    saw_null: bool,
    /// Elements of every array sample; `Some` once any array was seen
    elements: Option<Vec<&'v Value>>,
    objects: Vec<&'v JsonObject>,
    /// Values of every record sample; `Some` once any record was seen
    record_values: Option<Vec<&'v Value>>,
}

impl Pass<'_> {
    pub(super) fn group(&mut self, fields: &[FieldSpec], samples: &[&Value]) -> Result<Schema> {
        let partition = self.partition(fields, samples);

        let mut branches = Vec::new();
        if let Some(elements) = &partition.elements {
            let items = self.nested("[]", |pass| pass.group(fields, elements))?;
            branches.push(Schema::array(items));
        }
        if !partition.objects.is_empty() {
            branches.push(self.object(fields, &partition.objects)?);
        }
        if let Some(values) = &partition.record_values {
            let values = self.nested("{}", |pass| pass.group(fields, values))?;
            branches.push(Schema::map_of(values));
        }

        Ok(self.merge(branches, partition.saw_null))
    }

    fn partition<'v>(&mut self, fields: &[FieldSpec], samples: &[&'v Value]) -> Partition<'v> {
        let mut partition = Partition::default();

        for &sample in samples {
            let shape = classify(fields, sample);
            match (shape, sample) {
                (Shape::Null, _) => partition.saw_null = true,
                (Shape::ArrayOfGroup, Value::Array(items)) => partition
                    .elements
                    .get_or_insert_with(Vec::new)
                    .extend(items.iter()),
                (Shape::FixedObject { missing }, Value::Object(map)) => {
                    self.diagnose(
                        DiagnosticKind::PartialMatch,
                        format!(
                            "treated as object although declared fields are missing: {}",
                            missing.join(", ")
                        ),
                    );
                    partition.objects.push(map);
                }
                (Shape::ExtendedObject { surplus }, Value::Object(map)) => {
                    if !surplus.is_empty() {
                        tracing::debug!(path = %self.path(), ?surplus, "object carries undeclared keys");
                    }
                    partition.objects.push(map);
                }
                (Shape::Record, Value::Object(map)) => partition
                    .record_values
                    .get_or_insert_with(Vec::new)
                    .extend(map.values()),
                (_, other) => self.diagnose(
                    DiagnosticKind::UnexpectedValue,
                    format!("expected an object or array, got {}", kind_name(other)),
                ),
            }
        }

        partition
    }

    /// One object schema over the declared children
    ///
    /// Every declared child is a property, observed or not. Required-ness
    /// comes from the declaration alone.
    pub(super) fn object(&mut self, fields: &[FieldSpec], objects: &[&JsonObject]) -> Result<Schema> {
        let options = self.options;
        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for field in fields {
            let samples: Vec<&Value> = objects.iter().filter_map(|obj| obj.get(&field.name)).collect();
            let schema = self.field(field, &samples)?;
            if !field.is_extra(&options.extra_field_marker) {
                required.push(field.name.clone());
            }
            properties.insert(field.name.clone(), schema);
        }

        Ok(Schema::object(properties, required))
    }
}
