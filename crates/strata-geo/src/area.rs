use strata_core::Coordinate;

use crate::EARTH_RADIUS_M;

/// Drop the closing point of a closed ring.
fn open_ring(points: &[Coordinate]) -> &[Coordinate] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && first == last => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}

/// Number of distinct vertices of a ring, open or closed.
///
/// A polygon needs three before it can enclose any area.
#[must_use]
pub fn distinct_vertices(points: &[Coordinate]) -> usize {
    let ring = open_ring(points);
    let mut seen: Vec<Coordinate> = Vec::with_capacity(ring.len());
    for point in ring {
        if !seen.contains(point) {
            seen.push(*point);
        }
    }
    seen.len()
}

/// Unsigned area in square meters of the spherical polygon through `points`.
///
/// Uses the Chamberlain–Duquette ring formula
/// `|Σ (λ₂ − λ₁)(2 + sin φ₁ + sin φ₂)| · R² / 2`, which reduces to the planar
/// shoelace area for small polygons. Rings may be given open or closed and in
/// either winding order. Fewer than three distinct points yield `0.0`.
#[must_use]
pub fn polygon_area(points: &[Coordinate]) -> f64 {
    if distinct_vertices(points) < 3 {
        return 0.0;
    }
    let ring = open_ring(points);

    let n = ring.len();
    let sum: f64 = (0..n)
        .map(|i| {
            let p1 = ring[i];
            let p2 = ring[(i + 1) % n];
            (p2.longitude - p1.longitude).to_radians()
                * (2.0 + p1.latitude.to_radians().sin() + p2.latitude.to_radians().sin())
        })
        .sum();

    (sum * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0).abs()
}

/// Arithmetic mean of latitudes and longitudes.
///
/// A closed ring's repeated closing point is counted once. Returns `None` for
/// an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Coordinate]) -> Option<Coordinate> {
    let ring = open_ring(points);
    if ring.is_empty() {
        return None;
    }
    let n = ring.len() as f64;
    let (lat, lng) = ring.iter().fold((0.0, 0.0), |(lat, lng), p| {
        (lat + p.latitude, lng + p.longitude)
    });
    Some(Coordinate::new(lat / n, lng / n))
}
