//! Field dispatcher and public synthesis API

use super::diagnostics::{Diagnostic, DiagnosticKind};
use super::pass::{kind_name, Pass};
use crate::config::SynthesisOptions;
use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::spec::{FieldKind, FieldSpec};
use crate::types::{DocType, JsonObject};
use serde_json::Value;

/// Schema synthesized for one declared field
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedField {
    pub name: String,
    pub schema: Schema,
    /// False when the help text carries the extra-field marker
    pub required: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// A synthesized schema and the diagnostics raised while building it
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesized {
    pub schema: Schema,
    pub diagnostics: Vec<Diagnostic>,
}

/// Synthesizes schemas from declarations and recorded samples
///
/// Holds only options; every call is independent and reproducible.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    options: SynthesisOptions,
}

impl Synthesizer {
    /// Create a synthesizer with the given options
    pub fn new(options: SynthesisOptions) -> Self {
        Self { options }
    }

    /// Get the options
    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Synthesize the schema of one declared field from its corpus
    pub fn synthesize_field(&self, spec: &FieldSpec, samples: &[Value]) -> Result<SynthesizedField> {
        check_declared_types(std::slice::from_ref(spec), "")?;
        let samples: Vec<&Value> = samples.iter().collect();
        let mut pass = Pass::new(&self.options);
        let schema = pass.field(spec, &samples)?;

        Ok(SynthesizedField {
            name: spec.name.clone(),
            schema,
            required: !spec.is_extra(&self.options.extra_field_marker),
            diagnostics: pass.diagnostics.into_vec(),
        })
    }

    /// Synthesize a group's schema without field metadata
    pub fn synthesize_group(&self, fields: &[FieldSpec], samples: &[Value]) -> Result<Synthesized> {
        check_declared_types(fields, "")?;
        let samples: Vec<&Value> = samples.iter().collect();
        let mut pass = Pass::new(&self.options);
        let schema = pass.group(fields, &samples)?;

        Ok(Synthesized {
            schema,
            diagnostics: pass.diagnostics.into_vec(),
        })
    }

    /// Synthesize a primitive tag's schema from its samples
    pub fn synthesize_primitive(&self, doc_type: DocType, samples: &[Value]) -> Synthesized {
        let samples: Vec<&Value> = samples.iter().collect();
        let mut pass = Pass::new(&self.options);
        let schema = pass.primitive(doc_type, &samples);

        Synthesized {
            schema,
            diagnostics: pass.diagnostics.into_vec(),
        }
    }

    /// Synthesize the object schema of an endpoint's whole output
    ///
    /// `data_nodes` are the projected `data` subtrees of the recorded
    /// bodies. Each declared top-level field becomes one property.
    pub fn synthesize_output(&self, fields: &[FieldSpec], data_nodes: &[Value]) -> Result<Synthesized> {
        check_declared_types(fields, "")?;
        let mut pass = Pass::new(&self.options);

        let mut objects: Vec<&JsonObject> = Vec::with_capacity(data_nodes.len());
        for node in data_nodes {
            match node {
                Value::Object(map) => objects.push(map),
                other => pass.diagnose(
                    DiagnosticKind::UnexpectedValue,
                    format!("expected the output to be an object, got {}", kind_name(other)),
                ),
            }
        }

        let schema = pass.object(fields, &objects)?;
        Ok(Synthesized {
            schema,
            diagnostics: pass.diagnostics.into_vec(),
        })
    }
}

/// Parse every declared tag in the tree up front
///
/// Samples only ever reach part of a declaration, so a tag outside the
/// vocabulary fails here whatever the corpus holds. The error carries the
/// declared path, e.g. `result.amount`.
fn check_declared_types(fields: &[FieldSpec], parent: &str) -> Result<()> {
    for field in fields {
        let path = if parent.is_empty() {
            field.name.clone()
        } else {
            format!("{parent}.{}", field.name)
        };

        match &field.kind {
            FieldKind::Group { fields } => check_declared_types(fields, &path)?,
            FieldKind::Primitive { doc_type } => {
                DocType::parse(doc_type).map_err(|e| Error::synthesis(path, e))?;
            }
        }
    }
    Ok(())
}

/// Synthesize one field with the given options (convenience function)
pub fn synthesize_field(
    spec: &FieldSpec,
    samples: &[Value],
    options: &SynthesisOptions,
) -> Result<SynthesizedField> {
    Synthesizer::new(options.clone()).synthesize_field(spec, samples)
}

impl Pass<'_> {
    /// Route a declared field to its synthesizer and attach its documentation
    pub(super) fn field(&mut self, spec: &FieldSpec, samples: &[&Value]) -> Result<Schema> {
        self.nested(&spec.name, |pass| {
            let schema = match &spec.kind {
                FieldKind::Group { fields } => {
                    if samples.is_empty() {
                        pass.no_samples()
                    } else {
                        pass.group(fields, samples)?
                    }
                }
                FieldKind::Primitive { doc_type } => {
                    // A tag outside the vocabulary fails even without samples.
                    let doc_type =
                        DocType::parse(doc_type).map_err(|e| Error::synthesis(pass.path(), e))?;
                    if samples.is_empty() {
                        pass.no_samples()
                    } else {
                        pass.primitive(doc_type, samples)
                    }
                }
            };
            Ok(pass.annotate(spec, schema))
        })
    }

    fn no_samples(&mut self) -> Schema {
        self.diagnose(
            DiagnosticKind::InsufficientEvidence,
            "no samples observed; not enough tests to infer type",
        );
        Schema::any()
    }

    fn annotate(&self, spec: &FieldSpec, mut schema: Schema) -> Schema {
        let mut description = spec.description(&self.options.extra_field_marker);

        if spec.deprecated {
            schema.deprecated = Some(true);
            if let Some(text) = spec.deprecated_text.as_deref().map(str::trim) {
                if !text.is_empty() {
                    description = Some(match description {
                        Some(d) => format!("{d} Deprecated: {text}"),
                        None => format!("Deprecated: {text}"),
                    });
                }
            }
        }

        schema.description = description;
        schema
    }
}
