//! Error types for the storage layer

use std::path::PathBuf;
use thiserror::Error;

/// Failures a store surfaces to its caller.
///
/// Reads never produce one of these: an unreadable or corrupt document is
/// logged and treated as empty.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Feeding log not found: {0}")]
    LogNotFound(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// The missing id when this is a not-found error
    pub fn missing_id(&self) -> Option<&str> {
        match self {
            StorageError::LogNotFound(id) => Some(id),
            _ => None,
        }
    }
}
