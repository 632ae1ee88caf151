use pretty_assertions::assert_eq;
use strata_core::Coordinate;
use strata_core::entities::FindingLocation;
use strata_store::{MemoryRepository, SiteRepository, StorageError};

fn location(id: &str) -> FindingLocation {
    FindingLocation {
        finding_id: id.to_string(),
        coordinate: Coordinate::new(19.6915, -98.8441),
        depth: 0.3,
    }
}

#[test]
fn seeded_findings_are_listed_per_site() {
    let mut repo = MemoryRepository::new()
        .with_findings("site-1", [location("fnd-1"), location("fnd-2")])
        .with_findings("site-2", [location("fnd-3")]);
    repo.save_finding_location("site-1", &location("fnd-4"))
        .unwrap();

    let ids: Vec<String> = repo
        .list_findings_by_site("site-1")
        .unwrap()
        .into_iter()
        .map(|l| l.finding_id)
        .collect();
    assert_eq!(ids, ["fnd-1", "fnd-2", "fnd-4"]);
    assert!(repo.list_findings_by_site("site-9").unwrap().is_empty());
}

#[test]
fn missing_measurement_is_not_found() {
    let repo = MemoryRepository::new();
    assert!(matches!(
        repo.get_measurement("msr-0"),
        Err(StorageError::NotFound { .. })
    ));
}

#[test]
fn grid_units_are_ordered_and_replaced() {
    use strata_core::entities::GridConfig;
    use strata_grid::GridGenerator;

    let mut grid = GridGenerator::generate(
        Coordinate::new(19.6915, -98.8441),
        &GridConfig {
            cell_size: 2.0,
            rows: 2,
            cols: 2,
            orientation: 0.0,
        },
    )
    .unwrap();
    let mut repo = MemoryRepository::new();
    for cell in grid.cells.iter().rev() {
        repo.save_grid_unit(&grid.id, cell).unwrap();
    }
    grid.record_depth("B2", 0.4).unwrap();
    repo.save_grid_unit(&grid.id, grid.cell("B2").unwrap())
        .unwrap();

    let units = repo.list_grid_units(&grid.id).unwrap();
    let labels: Vec<&str> = units.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["A1", "A2", "B1", "B2"]);
    assert!(units[3].excavated);
}
