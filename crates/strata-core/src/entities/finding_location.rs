use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Where a find or sample was recorded. The finding itself is owned by the
/// data-access layer; only its id travels with the location.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FindingLocation {
    pub finding_id: String,
    pub coordinate: Coordinate,
    /// Depth below surface in meters.
    pub depth: f64,
}
