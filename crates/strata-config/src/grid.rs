//! Default grid geometry for the configured site.

use serde::{Deserialize, Serialize};
use strata_core::entities::GridConfig as GridGeometry;

use crate::error::ConfigError;

const fn default_cell_size() -> f64 {
    1.0
}

const fn default_dimension() -> u32 {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GridConfig {
    /// Cell side length in meters.
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,

    #[serde(default = "default_dimension")]
    pub rows: u32,

    #[serde(default = "default_dimension")]
    pub cols: u32,

    /// Degrees clockwise from north.
    #[serde(default)]
    pub orientation: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            rows: default_dimension(),
            cols: default_dimension(),
            orientation: 0.0,
        }
    }
}

impl GridConfig {
    /// Reject geometry the grid generator would refuse anyway, naming the
    /// offending config key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::invalid(
                "grid.cell_size",
                format!("must be a positive number of meters, got {}", self.cell_size),
            ));
        }
        if self.rows == 0 {
            return Err(ConfigError::invalid("grid.rows", "must be at least 1"));
        }
        if self.cols == 0 {
            return Err(ConfigError::invalid("grid.cols", "must be at least 1"));
        }
        if !self.orientation.is_finite() {
            return Err(ConfigError::invalid("grid.orientation", "must be finite"));
        }
        Ok(())
    }

    pub const fn geometry(&self) -> GridGeometry {
        GridGeometry {
            cell_size: self.cell_size,
            rows: self.rows,
            cols: self.cols,
            orientation: self.orientation,
        }
    }
}
