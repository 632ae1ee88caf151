use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::enums::GridUnitStatus;
use crate::errors::CoreError;

/// A stratigraphic layer recorded inside a cell.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SoilLayer {
    /// Depth of the layer's lower boundary in meters.
    pub depth: f64,
    pub description: String,
    #[serde(default)]
    pub finding_ids: Vec<String>,
}

/// North/south/east/west extrema of a polygon, in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CellBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl CellBounds {
    /// Extrema of `points`, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            north: first.latitude,
            south: first.latitude,
            east: first.longitude,
            west: first.longitude,
        };
        Some(points.iter().fold(init, |acc, p| Self {
            north: acc.north.max(p.latitude),
            south: acc.south.min(p.latitude),
            east: acc.east.max(p.longitude),
            west: acc.west.min(p.longitude),
        }))
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude <= self.north
            && point.latitude >= self.south
            && point.longitude <= self.east
            && point.longitude >= self.west
    }

    /// True when the two boxes share interior area (touching edges do not count).
    #[must_use]
    pub fn overlaps_interior(&self, other: &Self) -> bool {
        self.south < other.north
            && other.south < self.north
            && self.west < other.east
            && other.west < self.east
    }
}

/// One square subdivision of an excavation grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GridCell {
    /// Row letter(s) plus one-based column number, e.g. `"A1"`.
    pub label: String,
    pub row: u32,
    pub col: u32,
    /// Closed ring SW, SE, NE, NW, SW.
    pub polygon: Vec<Coordinate>,
    pub center: Coordinate,
    /// Side length in meters.
    pub size_m: f64,
    #[serde(default)]
    pub status: GridUnitStatus,
    #[serde(default)]
    pub excavated: bool,
    /// Current excavated depth in meters.
    #[serde(default)]
    pub depth: f64,
    #[serde(default)]
    pub finding_ids: Vec<String>,
    #[serde(default)]
    pub soil_layers: Vec<SoilLayer>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl GridCell {
    /// The four distinct corners (the polygon without its closing point).
    #[must_use]
    pub fn corners(&self) -> &[Coordinate] {
        let open = self.polygon.len().saturating_sub(1).min(4);
        &self.polygon[..open]
    }

    #[must_use]
    pub fn bounds(&self) -> Option<CellBounds> {
        CellBounds::from_points(&self.polygon)
    }

    /// Record a newly reached depth. Depth never decreases.
    ///
    /// A planned cell becomes active once digging starts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for negative or non-finite depths.
    pub fn record_depth(&mut self, depth: f64) -> Result<(), CoreError> {
        validate_depth(depth)?;
        self.depth = self.depth.max(depth);
        if self.depth > 0.0 {
            self.mark_excavated();
        }
        Ok(())
    }

    pub fn mark_excavated(&mut self) {
        self.excavated = true;
        if self.status == GridUnitStatus::Planned {
            self.status = GridUnitStatus::Active;
        }
    }

    /// Move the cell to `next` if the status state machine allows it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` otherwise.
    pub fn transition(&mut self, next: GridUnitStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "grid_cell".to_string(),
                id: self.label.clone(),
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        self.excavated = true;
        Ok(())
    }

    /// Insert a soil layer, keeping layers ordered by depth.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for negative or non-finite depths.
    pub fn add_soil_layer(&mut self, layer: SoilLayer) -> Result<(), CoreError> {
        validate_depth(layer.depth)?;
        let at = self
            .soil_layers
            .partition_point(|existing| existing.depth <= layer.depth);
        self.soil_layers.insert(at, layer);
        Ok(())
    }
}

fn validate_depth(depth: f64) -> Result<(), CoreError> {
    if depth.is_finite() && depth >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "depth must be a non-negative number of meters, got {depth}"
        )))
    }
}

/// A generated excavation grid. Geometry is fixed at generation time; only
/// cell metadata changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GridSystem {
    pub id: String,
    pub site_id: Option<String>,
    pub origin: Coordinate,
    /// Cell side length in meters.
    pub cell_size: f64,
    pub rows: u32,
    pub cols: u32,
    /// Degrees clockwise from north.
    pub orientation: f64,
    /// Row-major.
    pub cells: Vec<GridCell>,
}

impl GridSystem {
    #[must_use]
    pub fn cell(&self, label: &str) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.label == label)
    }

    #[must_use]
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&GridCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = (row as usize)
            .checked_mul(self.cols as usize)?
            .checked_add(col as usize)?;
        self.cells.get(index)
    }

    /// Mutable access to a cell's metadata.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown label.
    pub fn cell_mut(&mut self, label: &str) -> Result<&mut GridCell, CoreError> {
        self.cells
            .iter_mut()
            .find(|cell| cell.label == label)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "grid_cell".to_string(),
                id: label.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `CoreError` for an unknown label or an invalid depth.
    pub fn record_depth(&mut self, label: &str, depth: f64) -> Result<(), CoreError> {
        self.cell_mut(label)?.record_depth(depth)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown label.
    pub fn mark_excavated(&mut self, label: &str) -> Result<(), CoreError> {
        self.cell_mut(label)?.mark_excavated();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError` for an unknown label or a disallowed transition.
    pub fn set_status(&mut self, label: &str, status: GridUnitStatus) -> Result<(), CoreError> {
        self.cell_mut(label)?.transition(status)
    }

    /// # Errors
    ///
    /// Returns `CoreError` for an unknown label or an invalid depth.
    pub fn add_soil_layer(&mut self, label: &str, layer: SoilLayer) -> Result<(), CoreError> {
        self.cell_mut(label)?.add_soil_layer(layer)
    }

    /// Extent of the whole grid.
    #[must_use]
    pub fn bounds(&self) -> Option<CellBounds> {
        let corners: Vec<Coordinate> = self
            .cells
            .iter()
            .flat_map(|cell| cell.polygon.iter().copied())
            .collect();
        CellBounds::from_points(&corners)
    }

    #[must_use]
    pub fn excavated_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.excavated).count()
    }
}
