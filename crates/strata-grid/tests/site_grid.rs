//! A 4×4 grid of 5 m cells at a Buenos Aires site, generated and binned.

use pretty_assertions::assert_eq;
use strata_core::Coordinate;
use strata_core::entities::{FindingLocation, GridConfig, SiteContext};
use strata_geo::{distance, local_offset, offset_meters};
use strata_grid::{GridGenerator, SpatialBinner, cell_area, total_area};

const ORIGIN: Coordinate = Coordinate::new(-34.6037, -58.3816);

fn site() -> SiteContext {
    SiteContext::new(
        ORIGIN,
        GridConfig {
            cell_size: 5.0,
            rows: 4,
            cols: 4,
            orientation: 0.0,
        },
    )
    .with_site_id("site-palermo")
}

#[test]
fn sixteen_cells_labelled_row_major() {
    let grid = GridGenerator::generate_for_site(&site()).unwrap();
    let labels: Vec<&str> = grid.cells.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "A1", "A2", "A3", "A4", "B1", "B2", "B3", "B4", "C1", "C2", "C3", "C4", "D1", "D2",
            "D3", "D4"
        ]
    );
    assert_eq!(grid.site_id.as_deref(), Some("site-palermo"));
    for cell in &grid.cells {
        assert_eq!(cell.polygon.len(), 5);
        assert_eq!(cell.polygon.first(), cell.polygon.last());
    }
}

#[test]
fn first_cell_sits_south_west_of_origin() {
    let grid = GridGenerator::generate_for_site(&site()).unwrap();
    let a1 = grid.cell("A1").unwrap();
    let expected = offset_meters(ORIGIN, -7.5, -7.5);
    assert!(distance(a1.center, expected) < 1.0);

    let (north, east) = local_offset(ORIGIN, a1.center);
    assert!(north < 0.0 && east < 0.0);
}

#[test]
fn grid_covers_about_four_hundred_square_meters() {
    let grid = GridGenerator::generate_for_site(&site()).unwrap();
    for cell in &grid.cells {
        let area = cell_area(cell);
        assert!((area - 25.0).abs() < 0.5, "{} has {area}", cell.label);
    }
    assert!((total_area(&grid) - 400.0).abs() < 8.0);
}

#[test]
fn hundred_meters_east_measures_within_one_percent() {
    let east = offset_meters(ORIGIN, 0.0, 100.0);
    let meters = distance(ORIGIN, east);
    assert!((meters - 100.0).abs() < 1.0, "got {meters}");
}

#[test]
fn finds_bin_and_write_back() {
    let mut grid = GridGenerator::generate_for_site(&site()).unwrap();
    let c3 = grid.cell("C3").unwrap().center;
    let findings = [
        FindingLocation {
            finding_id: "fnd-sherd".into(),
            coordinate: c3,
            depth: 0.4,
        },
        FindingLocation {
            finding_id: "fnd-bone".into(),
            coordinate: offset_meters(c3, 1.5, -1.5),
            depth: 0.9,
        },
        FindingLocation {
            finding_id: "fnd-stray".into(),
            coordinate: offset_meters(ORIGIN, 0.0, 60.0),
            depth: 0.1,
        },
    ];

    let report = SpatialBinner::bin(&grid, &findings);
    assert_eq!(report.assigned_count(), 2);
    assert_eq!(report.unassigned.len(), 1);
    assert_eq!(report.unassigned[0].finding_id, "fnd-stray");

    SpatialBinner::apply(&mut grid, &report).unwrap();
    let cell = grid.cell("C3").unwrap();
    assert!(cell.excavated);
    assert_eq!(cell.depth, 0.9);
    assert_eq!(cell.finding_ids, ["fnd-sherd", "fnd-bone"]);
    assert_eq!(grid.excavated_count(), 1);
}
