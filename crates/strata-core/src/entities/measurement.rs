use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::enums::MeasurementMode;

/// Immutable result of a completed measurement session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Measurement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MeasurementMode,
    pub points: Vec<Coordinate>,
    /// Meters for distance, square meters for area, degrees for bearing.
    pub value: f64,
    pub unit: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub site_id: Option<String>,
}
