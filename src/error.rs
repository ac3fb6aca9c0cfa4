//! Errors raised while loading a tracking document.

use std::path::PathBuf;

/// Failure to turn a file on disk into a [`crate::model::Model`].
///
/// These are the only errors that leave the core; lookup misses and
/// malformed optional fields are absorbed during rendering and loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Error: {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error: missing required field '{field}' in {} (entry {index})", path.display())]
    MissingField {
        path: PathBuf,
        field: &'static str,
        index: usize,
    },
}

impl LoadError {
    /// A follow-up line printed under the error, if one helps.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LoadError::NotFound { .. } => {
                Some("Run from a directory containing features.json, or specify path.")
            },
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
