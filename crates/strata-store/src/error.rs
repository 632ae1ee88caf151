//! Storage error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a data file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// A stored line could not be encoded or decoded.
    #[error("Malformed record in {file}: {reason}")]
    Serialization { file: String, reason: String },

    /// The requested record does not exist.
    #[error("{entity_type} '{id}' not found")]
    NotFound { entity_type: String, id: String },
}

impl StorageError {
    /// Classify an I/O error from `serde_jsonlines`, which reports JSON
    /// failures as `InvalidData`.
    pub(crate) fn from_io(file: &str, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::InvalidData {
            Self::Serialization {
                file: file.to_string(),
                reason: error.to_string(),
            }
        } else {
            Self::Io(error)
        }
    }
}
