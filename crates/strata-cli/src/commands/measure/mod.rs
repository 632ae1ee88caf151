mod get;
mod list;
mod path;
mod take;

use strata_core::enums::MeasurementMode;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MeasureCommands;
use crate::context::AppContext;

/// Handle `strata measure`.
pub fn handle(
    action: &MeasureCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MeasureCommands::Point(args) => take::run(MeasurementMode::Point, args, ctx, flags),
        MeasureCommands::Distance(args) => take::run(MeasurementMode::Distance, args, ctx, flags),
        MeasureCommands::Bearing(args) => take::run(MeasurementMode::Bearing, args, ctx, flags),
        MeasureCommands::Area(args) => take::run(MeasurementMode::Area, args, ctx, flags),
        MeasureCommands::Path(args) => path::run(args, flags),
        MeasureCommands::List { site, limit } => list::run(site.as_deref(), *limit, ctx, flags),
        MeasureCommands::Get { id } => get::run(id, ctx, flags),
    }
}
