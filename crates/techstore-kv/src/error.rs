//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the key/value store.
#[derive(Error, Debug)]
pub enum KvError {
    /// Failed to open or create the store directory.
    #[error("Failed to open store at {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    /// Key contains characters that cannot be used as a record name.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Failed to serialize or deserialize a record.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to read or write a record.
    #[error("Store operation failed for key '{key}': {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },
}
