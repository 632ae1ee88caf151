use strata_core::responses::GridGenerateResponse;
use strata_grid::total_area;
use strata_store::SiteRepository;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GenerateArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &GenerateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let grid = super::load_grid(ctx, &args.geometry)?;

    if args.save {
        for cell in &grid.cells {
            ctx.repo.save_grid_unit(&grid.id, cell)?;
        }
        tracing::info!(grid = %grid.id, cells = grid.cells.len(), "saved grid units");
    }

    let response = GridGenerateResponse {
        cell_count: grid.cells.len(),
        total_area_m2: total_area(&grid),
        grid,
    };
    output(&response, flags.format)
}
