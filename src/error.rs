//! Fatal errors raised while merging translation fragments.
//!
//! Every variant aborts the run. None of them are retried and none are
//! collected: the first one detected is the one reported.

use std::path::PathBuf;
use thiserror::Error;

use crate::i18n::Locale;

/// Errors that abort a merge run.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The configured source root is missing or not a directory.
    #[error("Source root not found or not a directory: {}", path.display())]
    SourceRootMissing { path: PathBuf },

    /// A directory or file could not be read, created or written.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fragment is not valid JSON.
    #[error("Malformed fragment {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The fragment root is not a JSON object.
    #[error("Fragment {} must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },

    /// The fragment object is empty.
    #[error("No key found in fragment {}", path.display())]
    NoKey { path: PathBuf },

    /// The fragment object has more than one key.
    #[error("Expected one top-level key in fragment {}, found {count}", path.display())]
    TooManyKeys { path: PathBuf, count: usize },

    /// The single key holds `null`.
    #[error("No value found for key '{key}' in fragment {}", path.display())]
    MissingValue { path: PathBuf, key: String },

    /// The namespace was already absorbed for this locale.
    #[error(
        "Duplicate namespace '{key}' for locale '{locale}' in fragment {}",
        path.display()
    )]
    DuplicateNamespace {
        locale: Locale,
        key: String,
        path: PathBuf,
    },

    /// A merged mapping could not be serialized.
    #[error("Failed to serialize messages for locale '{locale}': {source}")]
    Serialize {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

impl MergeError {
    /// Wrap an I/O error with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
