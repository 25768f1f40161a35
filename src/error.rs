//! Error types for the entity model and the file-backed stores.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no data stored at {}", .0.display())]
    NoData(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to encode collection for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Missing or empty storage is the normal first-run state, not a failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, StorageError::NoData(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("subject {0} must have at least one level")]
    ZeroLevels(String),

    #[error("a wildcard was already used on this question")]
    WildcardAlreadyUsed,
}
