//! State of a single synthesis call
//!
//! A `Pass` lives for one public synthesis call and is dropped with it:
//! it carries the options, the path of the node being built and the
//! diagnostics raised so far. Nothing survives between calls.

use super::diagnostics::{DiagnosticKind, Diagnostics};
use crate::config::SynthesisOptions;
use crate::schema::{self, MergeOutcome, Schema};

pub(super) struct Pass<'a> {
    pub(super) options: &'a SynthesisOptions,
    path: Vec<String>,
    pub(super) diagnostics: Diagnostics,
}

impl<'a> Pass<'a> {
    pub(super) fn new(options: &'a SynthesisOptions) -> Self {
        Self {
            options,
            path: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Run `f` one level deeper; `[]` and `{}` mark element levels
    pub(super) fn nested<T>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment.to_string());
        let out = f(self);
        self.path.pop();
        out
    }

    /// Dotted path of the current node
    pub(super) fn path(&self) -> String {
        if self.path.is_empty() {
            return "$".to_string();
        }
        let mut out = String::new();
        for segment in &self.path {
            if !out.is_empty() && !segment.starts_with(['[', '{']) {
                out.push('.');
            }
            out.push_str(segment);
        }
        out
    }

    pub(super) fn diagnose(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let path = self.path();
        self.diagnostics.push(kind, &path, message);
    }

    /// Merge branches under the run's dialect, reporting empty and ambiguous results
    pub(super) fn merge(&mut self, branches: Vec<Schema>, saw_null: bool) -> Schema {
        let merged = schema::merge(branches, saw_null, self.options.dialect);
        match merged.outcome {
            MergeOutcome::Empty => self.diagnose(
                DiagnosticKind::InsufficientEvidence,
                if saw_null {
                    "only null samples; not enough tests to infer type"
                } else {
                    "not enough tests to infer type"
                },
            ),
            MergeOutcome::Single => {}
            MergeOutcome::Multiple(n) => self.diagnose(
                DiagnosticKind::MultipleShapes,
                format!("{n} shapes matched; emitting oneOf"),
            ),
        }
        merged.schema
    }
}

/// Short JSON kind name for messages
pub(super) fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
