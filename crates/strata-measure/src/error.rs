//! Measurement error types.

use strata_core::enums::{MeasurementMode, SessionState};
use strata_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeasureError {
    /// The session was finished before collecting enough points.
    #[error("{mode} measurement needs at least {required} points, got {actual}")]
    InsufficientPoints {
        mode: MeasurementMode,
        required: usize,
        actual: usize,
    },

    /// A point or finish was sent to a session that is not collecting.
    #[error("no measurement in progress (session is {state}); start one first")]
    NotCollecting { state: SessionState },

    /// More points were supplied than the mode consumes.
    #[error("{mode} measurement takes exactly {expected} points, got {actual}")]
    TooManyPoints {
        mode: MeasurementMode,
        expected: usize,
        actual: usize,
    },

    /// Coordinate validation or id generation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
