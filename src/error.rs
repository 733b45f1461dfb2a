//! Error types for schema-miner
//!
//! Only specification errors and loader failures surface as `Error`.
//! Noisy or missing evidence never does: those are reported as
//! [`Diagnostic`](crate::infer::Diagnostic)s and synthesis carries on.

use thiserror::Error;

/// The main error type for schema-miner
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Specification Errors
    // ============================================================================
    #[error("Unknown declared type '{doc_type}'")]
    UnknownDocType { doc_type: String },

    #[error("Unsupported list element type '{element}'")]
    UnsupportedListElement { element: String },

    #[error("Invalid field specification: {message}")]
    FieldSpec { message: String },

    #[error("Cannot synthesize field '{field}': {source}")]
    Synthesis {
        field: String,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // Corpus Errors
    // ============================================================================
    #[error("Invalid sample file '{path}': {message}")]
    Corpus { path: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// An error annotated with what was being attempted
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unknown declared type error
    pub fn unknown_doc_type(doc_type: impl Into<String>) -> Self {
        Self::UnknownDocType {
            doc_type: doc_type.into(),
        }
    }

    /// Create an unsupported list element error
    pub fn unsupported_list_element(element: impl Into<String>) -> Self {
        Self::UnsupportedListElement {
            element: element.into(),
        }
    }

    /// Create a field specification error
    pub fn field_spec(message: impl Into<String>) -> Self {
        Self::FieldSpec {
            message: message.into(),
        }
    }

    /// Attach the dotted path of the field whose synthesis failed
    pub fn synthesis(field: impl Into<String>, source: Error) -> Self {
        // Keep the innermost path; outer fields would only repeat a prefix.
        if let Self::Synthesis { .. } = source {
            return source;
        }
        Self::Synthesis {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// Create a corpus error
    pub fn corpus(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Corpus {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error comes from a declaration the engine cannot express
    pub fn is_spec_error(&self) -> bool {
        match self {
            Error::UnknownDocType { .. }
            | Error::UnsupportedListElement { .. }
            | Error::FieldSpec { .. } => true,
            Error::Synthesis { source, .. } | Error::Context { source, .. } => {
                source.is_spec_error()
            }
            _ => false,
        }
    }
}

/// Result type alias for schema-miner
pub type Result<T> = std::result::Result<T, Error>;

/// Annotate a failure with what was being attempted
///
/// The original error stays reachable through `source()`.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`context`](ResultExt::context), built only on failure
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
