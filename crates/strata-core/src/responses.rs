//! CLI response types returned as JSON by `strata` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::entities::{BinningReport, GridSystem, Measurement, RenderableLayer};

/// Response from `strata grid generate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GridGenerateResponse {
    pub grid: GridSystem,
    pub cell_count: usize,
    /// Sum of the spherical areas of all cells.
    pub total_area_m2: f64,
}

/// Response from `strata grid bin`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BinResponse {
    pub grid_id: String,
    pub assigned: u32,
    pub unassigned: u32,
    pub invalid_depth: u32,
    pub report: BinningReport,
}

/// Response from `strata measure path`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PathResponse {
    pub points: Vec<Coordinate>,
    pub legs: usize,
    pub length_m: f64,
    pub label: String,
}

/// Response from `strata measure list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MeasurementListResponse {
    pub measurements: Vec<Measurement>,
    pub total: usize,
}

/// Response from `strata layers`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LayersResponse {
    pub layers: Vec<RenderableLayer>,
    pub hidden: Vec<String>,
}
