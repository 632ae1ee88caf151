use strata_core::responses::PathResponse;
use strata_geo::path_length;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PathArgs;
use crate::output::output;

pub fn run(args: &PathArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&path_response(&args.at)?, flags.format)
}

fn path_response(points: &[strata_core::Coordinate]) -> anyhow::Result<PathResponse> {
    if points.len() < 2 {
        anyhow::bail!("a path needs at least 2 points, got {}", points.len());
    }
    let length_m = path_length(points);
    Ok(PathResponse {
        points: points.to_vec(),
        legs: points.len() - 1,
        label: format!("Path: {length_m:.2} m"),
        length_m,
    })
}

#[cfg(test)]
mod tests {
    use strata_core::Coordinate;
    use strata_geo::{distance, offset_meters};

    use super::*;

    #[test]
    fn legs_sum_to_length() {
        let a = Coordinate::new(-34.6037, -58.3816);
        let b = offset_meters(a, 30.0, 0.0);
        let c = offset_meters(b, 0.0, 40.0);
        let response = path_response(&[a, b, c]).unwrap();
        assert_eq!(response.legs, 2);
        assert!((response.length_m - (distance(a, b) + distance(b, c))).abs() < 1e-9);
        assert_eq!(response.label, format!("Path: {:.2} m", response.length_m));
    }

    #[test]
    fn single_point_is_rejected() {
        let err = path_response(&[Coordinate::new(0.0, 0.0)]).unwrap_err();
        assert!(err.to_string().contains("at least 2 points"));
    }
}
