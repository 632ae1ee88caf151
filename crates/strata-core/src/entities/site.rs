use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// Grid geometry requested for a site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GridConfig {
    /// Cell side length in meters.
    pub cell_size: f64,
    pub rows: u32,
    pub cols: u32,
    /// Degrees clockwise from north.
    #[serde(default)]
    pub orientation: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            rows: 4,
            cols: 4,
            orientation: 0.0,
        }
    }
}

/// Explicit site context handed to the grid and measurement entry points.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SiteContext {
    pub site_id: Option<String>,
    pub name: Option<String>,
    pub origin: Coordinate,
    pub grid: GridConfig,
}

impl SiteContext {
    #[must_use]
    pub const fn new(origin: Coordinate, grid: GridConfig) -> Self {
        Self {
            site_id: None,
            name: None,
            origin,
            grid,
        }
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }
}
