//! Error type for the side-index loaders.

use thiserror::Error;

/// Reading a side index failed.
///
/// Problems inside one metadata overlay header are not errors; they are
/// reported as diagnostics and the header is skipped.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// Malformed frameworks, filter or extension-method document.
    #[error("malformed XML: {0}")]
    Xml(String),

    /// Malformed moniker mapping.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required element or attribute is absent. `path` reads
    /// `Parent/Child` for elements and `Element@attribute` for attributes.
    #[error("missing {kind} `{path}`")]
    Missing { kind: &'static str, path: String },

    /// The overlay header pattern failed to compile.
    #[error("invalid overlay header pattern: {0}")]
    HeaderPattern(#[from] regex::Error),
}

impl InterchangeError {
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    pub fn missing_element(path: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            path: path.into(),
        }
    }

    pub fn missing_attribute(path: impl Into<String>) -> Self {
        Self::Missing {
            kind: "attribute",
            path: path.into(),
        }
    }
}
