mod bin;
mod cell;
mod generate;

use strata_core::entities::{GridCell, GridSystem};
use strata_grid::GridGenerator;
use strata_store::SiteRepository;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{GeometryArgs, GridCommands};
use crate::context::AppContext;

/// Handle `strata grid`.
pub fn handle(action: &GridCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GridCommands::Generate(args) => generate::run(args, ctx, flags),
        GridCommands::Bin(args) => bin::run(args, ctx, flags),
        GridCommands::Cell(args) => cell::run(args, ctx, flags),
    }
}

/// Generate the site grid and lay the stored unit records over it.
fn load_grid(ctx: &AppContext, geometry: &GeometryArgs) -> anyhow::Result<GridSystem> {
    let site = ctx.site_context(geometry)?;
    let mut grid = GridGenerator::generate_for_site(&site)?;
    let saved = ctx.repo.list_grid_units(&grid.id)?;
    let restored = restore_units(&mut grid, saved);
    tracing::debug!(grid = %grid.id, restored, "loaded grid");
    Ok(grid)
}

/// Copy saved metadata onto matching cells. Geometry always comes from the
/// fresh grid. Returns how many cells were restored.
fn restore_units(grid: &mut GridSystem, saved: Vec<GridCell>) -> usize {
    let mut restored = 0;
    for unit in saved {
        let Ok(cell) = grid.cell_mut(&unit.label) else {
            tracing::warn!(grid = %grid.id, label = %unit.label, "stored unit has no cell in this grid");
            continue;
        };
        cell.status = unit.status;
        cell.excavated = unit.excavated;
        cell.depth = unit.depth;
        cell.finding_ids = unit.finding_ids;
        cell.soil_layers = unit.soil_layers;
        cell.notes = unit.notes;
        restored += 1;
    }
    restored
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strata_core::Coordinate;
    use strata_core::entities::GridConfig;
    use strata_core::enums::GridUnitStatus;

    use super::*;

    fn grid() -> GridSystem {
        GridGenerator::generate(Coordinate::new(-34.6037, -58.3816), &GridConfig::default())
            .unwrap()
    }

    #[test]
    fn restores_metadata_but_not_geometry() {
        let mut grid = grid();
        let mut saved = grid.cell("B2").unwrap().clone();
        saved.depth = 1.5;
        saved.excavated = true;
        saved.status = GridUnitStatus::Active;
        saved.center = Coordinate::new(0.0, 0.0);

        let mut stray = saved.clone();
        stray.label = "Z9".into();

        assert_eq!(restore_units(&mut grid, vec![saved, stray]), 1);
        let cell = grid.cell("B2").unwrap();
        assert_eq!(cell.depth, 1.5);
        assert_eq!(cell.status, GridUnitStatus::Active);
        assert_ne!(cell.center, Coordinate::new(0.0, 0.0));
    }
}
