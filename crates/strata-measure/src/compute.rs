use strata_core::Coordinate;
use strata_core::enums::MeasurementMode;
use strata_geo::{bearing, distance, polygon_area};

/// Value of a measurement over `points` (assumed to satisfy the mode's minimum).
#[must_use]
pub fn measure_value(mode: MeasurementMode, points: &[Coordinate]) -> f64 {
    match (mode, points) {
        (MeasurementMode::Distance, [a, b, ..]) => distance(*a, *b),
        (MeasurementMode::Bearing, [a, b, ..]) => bearing(*a, *b),
        (MeasurementMode::Area, _) => polygon_area(points),
        _ => 0.0,
    }
}

/// Human label shown next to a finished measurement.
#[must_use]
pub fn format_label(mode: MeasurementMode, value: f64, points: &[Coordinate]) -> String {
    match mode {
        MeasurementMode::Point => points
            .first()
            .map_or_else(|| String::from("Point"), |p| format!("Point: {p}")),
        MeasurementMode::Distance => format!("Distance: {value:.2} m"),
        MeasurementMode::Area => {
            format!("Area: {value:.2} m² ({:.4} ha)", value / 10_000.0)
        }
        MeasurementMode::Bearing => format!("Bearing: {value:.1}°"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_label_shows_six_decimals() {
        let p = Coordinate::new(-34.6037, -58.3816);
        assert_eq!(
            format_label(MeasurementMode::Point, 0.0, &[p]),
            "Point: -34.603700, -58.381600"
        );
    }

    #[test]
    fn area_label_includes_hectares() {
        let label = format_label(MeasurementMode::Area, 12_500.0, &[]);
        assert_eq!(label, "Area: 12500.00 m² (1.2500 ha)");
    }

    #[test]
    fn bearing_label_has_one_decimal() {
        assert_eq!(
            format_label(MeasurementMode::Bearing, 271.26, &[]),
            "Bearing: 271.3°"
        );
    }

    #[test]
    fn point_value_is_zero() {
        let p = Coordinate::new(1.0, 2.0);
        assert_eq!(measure_value(MeasurementMode::Point, &[p]), 0.0);
    }
}
