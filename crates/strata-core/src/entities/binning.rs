use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Per-cell result of binning finding locations into a grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CellAggregate {
    pub label: String,
    pub finding_count: u32,
    pub excavated: bool,
    pub min_depth: Option<f64>,
    pub max_depth: Option<f64>,
    pub finding_ids: Vec<String>,
}

impl CellAggregate {
    #[must_use]
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            finding_count: 0,
            excavated: false,
            min_depth: None,
            max_depth: None,
            finding_ids: Vec::new(),
        }
    }
}

/// A finding location that fell outside every grid cell.
///
/// Non-fatal: reported alongside the aggregates so the caller can show the
/// find as an orphan instead of losing it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UnassignedFindingWarning {
    pub finding_id: String,
    pub coordinate: Coordinate,
    pub depth: f64,
}

impl fmt::Display for UnassignedFindingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finding {} at ({}) lies outside every grid cell",
            self.finding_id, self.coordinate
        )
    }
}

/// A finding location whose depth is negative or not a number.
///
/// Left out of every aggregate so cell depths stay valid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InvalidDepthWarning {
    pub finding_id: String,
    pub depth: f64,
}

impl fmt::Display for InvalidDepthWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finding {} has depth {}, expected a non-negative number of meters",
            self.finding_id, self.depth
        )
    }
}

/// Output of binning: one aggregate per cell (grid order) plus orphans.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BinningReport {
    pub cells: Vec<CellAggregate>,
    pub unassigned: Vec<UnassignedFindingWarning>,
    #[serde(default)]
    pub invalid_depth: Vec<InvalidDepthWarning>,
}

impl BinningReport {
    #[must_use]
    pub fn aggregate(&self, label: &str) -> Option<&CellAggregate> {
        self.cells.iter().find(|cell| cell.label == label)
    }

    #[must_use]
    pub fn assigned_count(&self) -> u32 {
        self.cells.iter().map(|cell| cell.finding_count).sum()
    }
}
