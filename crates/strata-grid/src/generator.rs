use strata_core::Coordinate;
use strata_core::entities::{GridCell, GridConfig, GridSystem, SiteContext};
use strata_core::enums::GridUnitStatus;
use strata_core::ids::PREFIX_GRID;
use strata_geo::{centroid, polygon_area};

use crate::error::GridError;
use crate::frame::GridFrame;
use crate::labels::cell_label;

/// Upper bound on `rows * cols` for a single grid.
pub const MAX_CELLS: u64 = 250_000;

/// Builds rectangular excavation grids.
pub struct GridGenerator;

impl GridGenerator {
    /// Generate the `rows × cols` grid centered on `origin`.
    ///
    /// Cells are emitted row-major, row 0 being the southernmost. Identical
    /// inputs always produce an identical grid, id included.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidConfig` for a non-positive cell size, zero
    /// rows or columns, a non-finite orientation, an out-of-range origin, or
    /// more than [`MAX_CELLS`] cells.
    pub fn generate(origin: Coordinate, config: &GridConfig) -> Result<GridSystem, GridError> {
        validate(origin, config)?;

        let orientation = normalize_orientation(config.orientation);
        let frame = GridFrame::new(origin, config.cell_size, config.rows, config.cols, orientation);

        let mut cells = Vec::with_capacity((config.rows * config.cols) as usize);
        for row in 0..config.rows {
            for col in 0..config.cols {
                cells.push(build_cell(&frame, row, col, config.cell_size));
            }
        }

        tracing::debug!(
            rows = config.rows,
            cols = config.cols,
            cell_size = config.cell_size,
            orientation,
            "generated excavation grid"
        );

        Ok(GridSystem {
            id: grid_id(origin, config, orientation),
            site_id: None,
            origin,
            cell_size: config.cell_size,
            rows: config.rows,
            cols: config.cols,
            orientation,
            cells,
        })
    }

    /// Generate the grid described by a site context, tagging it with the site id.
    ///
    /// # Errors
    ///
    /// See [`GridGenerator::generate`].
    pub fn generate_for_site(site: &SiteContext) -> Result<GridSystem, GridError> {
        let mut grid = Self::generate(site.origin, &site.grid)?;
        grid.site_id.clone_from(&site.site_id);
        Ok(grid)
    }
}

/// Spherical area of one cell in square meters.
#[must_use]
pub fn cell_area(cell: &GridCell) -> f64 {
    polygon_area(&cell.polygon)
}

/// Sum of all cell areas in square meters.
#[must_use]
pub fn total_area(grid: &GridSystem) -> f64 {
    grid.cells.iter().map(cell_area).sum()
}

fn validate(origin: Coordinate, config: &GridConfig) -> Result<(), GridError> {
    if !origin.is_valid() {
        return Err(GridError::invalid(
            "origin",
            format!("({origin}) is not a valid WGS84 coordinate"),
        ));
    }
    if !config.cell_size.is_finite() || config.cell_size <= 0.0 {
        return Err(GridError::invalid(
            "cell_size",
            format!("must be a positive number of meters, got {}", config.cell_size),
        ));
    }
    if config.rows == 0 {
        return Err(GridError::invalid("rows", "must be at least 1"));
    }
    if config.cols == 0 {
        return Err(GridError::invalid("cols", "must be at least 1"));
    }
    let count = u64::from(config.rows) * u64::from(config.cols);
    if count > MAX_CELLS {
        return Err(GridError::invalid(
            "rows",
            format!("{count} cells requested, at most {MAX_CELLS} allowed"),
        ));
    }
    if !config.orientation.is_finite() {
        return Err(GridError::invalid("orientation", "must be a finite angle in degrees"));
    }
    Ok(())
}

fn normalize_orientation(orientation: f64) -> f64 {
    let normalized = orientation.rem_euclid(360.0);
    if normalized >= 360.0 { 0.0 } else { normalized }
}

fn build_cell(frame: &GridFrame, row: u32, col: u32, size: f64) -> GridCell {
    let (south, west) = frame.south_west(row, col);
    let sw = frame.to_world(south, west);
    let se = frame.to_world(south, west + size);
    let ne = frame.to_world(south + size, west + size);
    let nw = frame.to_world(south + size, west);

    GridCell {
        label: cell_label(row, col),
        row,
        col,
        polygon: vec![sw, se, ne, nw, sw],
        center: centroid(&[sw, se, ne, nw]).unwrap_or(sw),
        size_m: size,
        status: GridUnitStatus::Planned,
        excavated: false,
        depth: 0.0,
        finding_ids: Vec::new(),
        soil_layers: Vec::new(),
        notes: None,
    }
}

/// FNV-1a over the generating parameters.
fn grid_id(origin: Coordinate, config: &GridConfig, orientation: f64) -> String {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    let mut bytes = Vec::with_capacity(40);
    bytes.extend_from_slice(&origin.latitude.to_bits().to_le_bytes());
    bytes.extend_from_slice(&origin.longitude.to_bits().to_le_bytes());
    bytes.extend_from_slice(&config.cell_size.to_bits().to_le_bytes());
    bytes.extend_from_slice(&config.rows.to_le_bytes());
    bytes.extend_from_slice(&config.cols.to_le_bytes());
    bytes.extend_from_slice(&orientation.to_bits().to_le_bytes());

    let hash = bytes
        .iter()
        .fold(OFFSET_BASIS, |hash, byte| (hash ^ u32::from(*byte)).wrapping_mul(PRIME));
    format!("{PREFIX_GRID}-{hash:08x}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strata_geo::offset_meters;

    use super::*;

    const ORIGIN: Coordinate = Coordinate::new(-34.6037, -58.3816);

    fn config(cell_size: f64, rows: u32, cols: u32) -> GridConfig {
        GridConfig {
            cell_size,
            rows,
            cols,
            orientation: 0.0,
        }
    }

    #[test]
    fn four_by_four_grid_has_sixteen_closed_cells() {
        let grid = GridGenerator::generate(ORIGIN, &config(5.0, 4, 4)).unwrap();
        assert_eq!(grid.cells.len(), 16);
        for cell in &grid.cells {
            assert_eq!(cell.polygon.len(), 5);
            assert_eq!(cell.polygon.first(), cell.polygon.last());
            assert_eq!(cell.corners().len(), 4);
        }
    }

    #[test]
    fn cells_never_overlap_beyond_shared_edges() {
        let grid = GridGenerator::generate(ORIGIN, &config(5.0, 4, 4)).unwrap();
        let bounds: Vec<_> = grid.cells.iter().map(|c| c.bounds().unwrap()).collect();
        for (i, a) in bounds.iter().enumerate() {
            for b in &bounds[i + 1..] {
                assert!(!a.overlaps_interior(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn labels_are_unique_and_row_major() {
        let grid = GridGenerator::generate(ORIGIN, &config(1.0, 2, 3)).unwrap();
        let labels: Vec<&str> = grid.cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["A1", "A2", "A3", "B1", "B2", "B3"]);
    }

    #[test]
    fn first_cell_center_is_at_expected_offset() {
        let grid = GridGenerator::generate(ORIGIN, &config(5.0, 4, 4)).unwrap();
        let a1 = grid.cell("A1").unwrap();
        // SW corner at (-10 m, -10 m), center half a cell further in.
        let expected = offset_meters(ORIGIN, -7.5, -7.5);
        let miss = strata_geo::distance(a1.center, expected);
        assert!(miss < 1.0, "A1 center off by {miss} m");
    }

    #[test]
    fn cell_center_lies_inside_its_bounds() {
        let grid = GridGenerator::generate(ORIGIN, &config(2.0, 3, 5)).unwrap();
        for cell in &grid.cells {
            assert!(cell.bounds().unwrap().contains(cell.center));
        }
    }

    #[test]
    fn cell_area_is_about_size_squared() {
        let grid = GridGenerator::generate(ORIGIN, &config(5.0, 4, 4)).unwrap();
        let area = cell_area(&grid.cells[0]);
        assert!((area - 25.0).abs() < 0.25, "got {area}");
        assert!((total_area(&grid) - 400.0).abs() < 4.0);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = GridGenerator::generate(ORIGIN, &config(5.0, 4, 4)).unwrap();
        let b = GridGenerator::generate(ORIGIN, &config(5.0, 4, 4)).unwrap();
        assert_eq!(a, b);
        assert!(a.id.starts_with("grd-"));
        let c = GridGenerator::generate(ORIGIN, &config(5.0, 4, 5)).unwrap();
        assert_ne!(a.id, c.id);
    }

    #[rstest]
    #[case(config(0.0, 4, 4), "cell_size")]
    #[case(config(-5.0, 4, 4), "cell_size")]
    #[case(config(f64::NAN, 4, 4), "cell_size")]
    #[case(config(5.0, 0, 4), "rows")]
    #[case(config(5.0, 4, 0), "cols")]
    #[case(config(1.0, 1000, 1000), "rows")]
    fn rejects_invalid_configuration(#[case] config: GridConfig, #[case] field: &str) {
        match GridGenerator::generate(ORIGIN, &config) {
            Err(GridError::InvalidConfig { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected InvalidConfig for {field}, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_orientation() {
        let mut config = config(1.0, 1, 1);
        config.orientation = f64::INFINITY;
        assert!(matches!(
            GridGenerator::generate(ORIGIN, &config),
            Err(GridError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn orientation_is_normalized_and_applied() {
        let mut rotated = config(5.0, 2, 2);
        rotated.orientation = -270.0;
        let grid = GridGenerator::generate(ORIGIN, &rotated).unwrap();
        assert!((grid.orientation - 90.0).abs() < 1e-9);

        let straight = GridGenerator::generate(ORIGIN, &config(5.0, 2, 2)).unwrap();
        assert_ne!(grid.cells[0].polygon, straight.cells[0].polygon);
        // Rotation preserves cell area.
        let ratio = cell_area(&grid.cells[0]) / cell_area(&straight.cells[0]);
        assert!((ratio - 1.0).abs() < 0.01, "area ratio {ratio}");
    }

    #[test]
    fn site_context_carries_site_id() {
        let site = SiteContext::new(ORIGIN, config(1.0, 1, 1)).with_site_id("site-42");
        let grid = GridGenerator::generate_for_site(&site).unwrap();
        assert_eq!(grid.site_id.as_deref(), Some("site-42"));
    }
}
