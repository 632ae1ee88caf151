use strata_core::Coordinate;

use crate::EARTH_RADIUS_M;

/// Great-circle distance in meters (haversine).
///
/// Symmetric in its arguments and exactly `0.0` for identical points.
#[must_use]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    // abs() keeps the result bit-identical when the arguments are swapped.
    let d_phi = (b.latitude - a.latitude).abs().to_radians();
    let d_lambda = (b.longitude - a.longitude).abs().to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial great-circle bearing from `a` to `b`, in degrees within [0, 360).
///
/// Identical points yield `0.0`.
#[must_use]
pub fn bearing(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    let degrees = y.atan2(x).to_degrees();
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Total length in meters of the polyline through `points`.
#[must_use]
pub fn path_length(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|leg| distance(leg[0], leg[1])).sum()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::offset_meters;

    const BUENOS_AIRES: Coordinate = Coordinate::new(-34.6037, -58.3816);

    #[rstest]
    #[case(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0))]
    #[case(BUENOS_AIRES, Coordinate::new(-34.6035, -58.3814))]
    #[case(Coordinate::new(51.5, -0.12), Coordinate::new(48.85, 2.35))]
    #[case(Coordinate::new(89.9, 10.0), Coordinate::new(-89.9, -170.0))]
    fn distance_is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[rstest]
    #[case(BUENOS_AIRES)]
    #[case(Coordinate::new(0.0, 0.0))]
    #[case(Coordinate::new(-90.0, 180.0))]
    fn distance_to_self_is_zero(#[case] a: Coordinate) {
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        // 2πR / 360
        assert!((d - 111_194.93).abs() < 0.01, "got {d}");
    }

    #[test]
    fn hundred_meters_east_west_in_buenos_aires() {
        let east = offset_meters(BUENOS_AIRES, 0.0, 100.0);
        let d = distance(BUENOS_AIRES, east);
        assert!((d - 100.0).abs() < 1.0, "got {d}");
    }

    #[rstest]
    #[case(Coordinate::new(1.0, 0.0), 0.0)]
    #[case(Coordinate::new(0.0, 1.0), 90.0)]
    #[case(Coordinate::new(-1.0, 0.0), 180.0)]
    #[case(Coordinate::new(0.0, -1.0), 270.0)]
    fn cardinal_bearings_from_origin(#[case] to: Coordinate, #[case] expected: f64) {
        let b = bearing(Coordinate::new(0.0, 0.0), to);
        assert!((b - expected).abs() < 1e-9, "got {b}");
    }

    #[test]
    fn bearing_of_identical_points_is_zero() {
        assert_eq!(bearing(BUENOS_AIRES, BUENOS_AIRES), 0.0);
    }

    #[test]
    fn path_length_sums_legs() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.5);
        let c = Coordinate::new(0.0, 1.0);
        let total = path_length(&[a, b, c]);
        assert!((total - distance(a, c)).abs() < 1e-6);
        assert_eq!(path_length(&[a]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
