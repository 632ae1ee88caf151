//! # strata-measure
//!
//! A measurement session accumulates user clicks for one derived quantity
//! (a point, a distance, an area or a bearing) and emits a single immutable
//! `Measurement` when it completes.
//!
//! One session object per user context; sessions share no state.

mod compute;
mod error;
mod session;

pub use compute::{format_label, measure_value};
pub use error::MeasureError;
pub use session::MeasurementSession;
