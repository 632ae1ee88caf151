//! # strata-geo
//!
//! Spherical-earth primitives used by the grid and measurement crates.
//!
//! Everything here assumes a sphere of radius [`EARTH_RADIUS_M`]. That is
//! accurate to well under a percent at excavation scale (tens to hundreds of
//! meters); geodetic datum corrections are out of scope, as are polygons that
//! cross the antimeridian or enclose a pole.

mod area;
mod distance;
mod projection;

pub use area::{centroid, distinct_vertices, polygon_area};
pub use distance::{bearing, distance, path_length};
pub use projection::{local_offset, offset_meters};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude (and of longitude at the equator) used by
/// the local equirectangular approximation.
pub const METERS_PER_DEGREE: f64 = 111_320.0;
