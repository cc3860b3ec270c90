//! Error types for the declaration store.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures of declaration store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// `add` found an artifact already stored under the name.
    #[error("declaration \"{0}\" already exists")]
    AlreadyExists(String),

    /// No stored declaration under the name (or, for `update`, one of its
    /// two artifacts is missing).
    #[error("declaration \"{0}\" not found")]
    NotFound(String),

    /// The name cannot key a file in the store.
    #[error("invalid declaration name \"{0}\"")]
    InvalidName(String),

    /// Filesystem failure on a specific path.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// The path being read, written or removed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A canonical document could not be encoded or decoded.
    #[error("malformed document {}: {source}", path.display())]
    Json {
        /// The document path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A canonical document does not conform to the declaration schema.
    #[error("declaration \"{name}\" violates the document schema: {}", violations.join("; "))]
    Schema {
        /// The declaration name.
        name: String,
        /// One entry per violation, prefixed with the instance path.
        violations: Vec<String>,
    },

    /// The embedded document schema failed to compile.
    #[error("document schema failed to compile: {0}")]
    SchemaBuild(String),

    /// Deletion kept failing until the deadline passed.
    #[error("removing declaration \"{name}\" did not complete within {timeout:?}")]
    RemoveTimedOut {
        /// The declaration name.
        name: String,
        /// The deadline that elapsed.
        timeout: Duration,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
