//! The grid's local metric frame.
//!
//! Grid coordinates `(gn, ge)` are meters along the grid's own north and east
//! axes, measured from the grid origin. With a non-zero orientation the grid
//! axes are rotated clockwise from true north before projection.

use strata_core::Coordinate;
use strata_geo::{local_offset, offset_meters};

/// Tolerance in meters for containment on cell edges.
const EDGE_TOLERANCE_M: f64 = 1e-9;

#[derive(Debug, Clone, Copy)]
pub(crate) struct GridFrame {
    origin: Coordinate,
    size: f64,
    rows: u32,
    cols: u32,
    sin: f64,
    cos: f64,
}

impl GridFrame {
    pub(crate) fn new(origin: Coordinate, size: f64, rows: u32, cols: u32, orientation: f64) -> Self {
        let theta = orientation.to_radians();
        Self {
            origin,
            size,
            rows,
            cols,
            sin: theta.sin(),
            cos: theta.cos(),
        }
    }

    /// South-west corner of cell `(row, col)` in grid coordinates.
    ///
    /// The grid is centered on the origin: cell `(0, 0)` starts `rows / 2`
    /// cells south and `cols / 2` cells west of it.
    pub(crate) fn south_west(&self, row: u32, col: u32) -> (f64, f64) {
        (
            (f64::from(row) - f64::from(self.rows) / 2.0) * self.size,
            (f64::from(col) - f64::from(self.cols) / 2.0) * self.size,
        )
    }

    pub(crate) fn to_world(&self, gn: f64, ge: f64) -> Coordinate {
        let north = gn * self.cos - ge * self.sin;
        let east = gn * self.sin + ge * self.cos;
        offset_meters(self.origin, north, east)
    }

    pub(crate) fn to_grid(&self, point: Coordinate) -> (f64, f64) {
        let (north, east) = local_offset(self.origin, point);
        (
            north * self.cos + east * self.sin,
            -north * self.sin + east * self.cos,
        )
    }

    /// Inclusive point-in-cell test in the grid frame.
    pub(crate) fn cell_contains(&self, row: u32, col: u32, point: Coordinate) -> bool {
        let (south, west) = self.south_west(row, col);
        let (gn, ge) = self.to_grid(point);
        gn >= south - EDGE_TOLERANCE_M
            && gn <= south + self.size + EDGE_TOLERANCE_M
            && ge >= west - EDGE_TOLERANCE_M
            && ge <= west + self.size + EDGE_TOLERANCE_M
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrotated_frame_matches_plain_offsets() {
        let origin = Coordinate::new(-34.6037, -58.3816);
        let frame = GridFrame::new(origin, 5.0, 4, 4, 0.0);
        assert_eq!(frame.to_world(-10.0, 5.0), offset_meters(origin, -10.0, 5.0));
        assert_eq!(frame.south_west(0, 0), (-10.0, -10.0));
    }

    #[test]
    fn quarter_turn_points_grid_north_east() {
        let origin = Coordinate::new(0.0, 0.0);
        let frame = GridFrame::new(origin, 1.0, 1, 1, 90.0);
        let (north, east) = local_offset(origin, frame.to_world(10.0, 0.0));
        assert!(north.abs() < 1e-6);
        assert!((east - 10.0).abs() < 1e-6);
    }

    #[test]
    fn to_grid_inverts_to_world() {
        let frame = GridFrame::new(Coordinate::new(45.0, 7.0), 2.0, 3, 3, 33.0);
        let (gn, ge) = frame.to_grid(frame.to_world(1.25, -2.5));
        assert!((gn - 1.25).abs() < 1e-6);
        assert!((ge + 2.5).abs() < 1e-6);
    }
}
