use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerError {
    #[error("Layer '{id}' not found")]
    NotFound { id: String },
}
