//! Local equirectangular conversion between metric offsets and coordinates.
//!
//! The longitude scale is taken at the origin's latitude, so both functions
//! are exact inverses of each other. Accuracy degrades towards the poles.

use strata_core::Coordinate;

use crate::METERS_PER_DEGREE;

/// The coordinate `d_north` meters north and `d_east` meters east of `origin`.
#[must_use]
pub fn offset_meters(origin: Coordinate, d_north: f64, d_east: f64) -> Coordinate {
    let meters_per_degree_lng = METERS_PER_DEGREE * origin.latitude.to_radians().cos();
    Coordinate::new(
        origin.latitude + d_north / METERS_PER_DEGREE,
        origin.longitude + d_east / meters_per_degree_lng,
    )
}

/// Metric `(d_north, d_east)` offset of `point` from `origin`.
#[must_use]
pub fn local_offset(origin: Coordinate, point: Coordinate) -> (f64, f64) {
    let meters_per_degree_lng = METERS_PER_DEGREE * origin.latitude.to_radians().cos();
    (
        (point.latitude - origin.latitude) * METERS_PER_DEGREE,
        (point.longitude - origin.longitude) * meters_per_degree_lng,
    )
}
