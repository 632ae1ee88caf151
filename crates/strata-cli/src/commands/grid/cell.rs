use strata_core::entities::SoilLayer;
use strata_core::enums::GridUnitStatus;
use strata_store::SiteRepository;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CellArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &CellArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut grid = super::load_grid(ctx, &args.geometry)?;
    let label = args.label.to_ascii_uppercase();

    if let Some(depth) = args.depth {
        grid.record_depth(&label, depth)?;
    }
    if let Some(raw) = &args.status {
        let status: GridUnitStatus = parse_enum(raw, "status")?;
        grid.set_status(&label, status)?;
    }
    if let (Some(depth), Some(description)) = (args.layer_depth, &args.layer_description) {
        grid.add_soil_layer(
            &label,
            SoilLayer {
                depth,
                description: description.clone(),
                finding_ids: args.layer_finding.clone(),
            },
        )?;
    }

    let grid_id = grid.id.clone();
    let cell = grid.cell_mut(&label)?;
    if let Some(note) = &args.note {
        cell.notes = Some(note.clone());
    }

    ctx.repo.save_grid_unit(&grid_id, cell)?;
    output(&*cell, flags.format)
}
