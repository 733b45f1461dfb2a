//! Non-fatal synthesis diagnostics
//!
//! Every diagnostic is logged through `tracing` when raised and also
//! returned to the caller, who may inspect or ignore it.

use serde::{Deserialize, Serialize};

/// What kind of evidence problem was met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No usable samples at a position
    InsufficientEvidence,
    /// More than one structural shape at a position
    MultipleShapes,
    /// An object missing some declared fields
    PartialMatch,
    /// A sample that does not fit the declared kind
    UnexpectedValue,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::InsufficientEvidence => write!(f, "insufficient_evidence"),
            DiagnosticKind::MultipleShapes => write!(f, "multiple_shapes"),
            DiagnosticKind::PartialMatch => write!(f, "partial_match"),
            DiagnosticKind::UnexpectedValue => write!(f, "unexpected_value"),
        }
    }
}

/// One diagnostic, located by the dotted path of the node it concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// e.g. `open{}.descr` or `trades[]`; `$` is the output root
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.path, self.message)
    }
}

/// Collected diagnostics of one synthesis call
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic
    pub fn push(&mut self, kind: DiagnosticKind, path: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%kind, path, "{message}");
        self.entries.push(Diagnostic {
            kind,
            path: path.to_string(),
            message,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
