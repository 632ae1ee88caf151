//! Grid error types.

use strata_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    /// The requested grid geometry cannot be built.
    #[error("Invalid grid configuration for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Cell metadata update failed (unknown label, bad depth, bad transition).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl GridError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
