use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Grid { action } => commands::grid::handle(action, ctx, flags),
        Commands::Measure { action } => commands::measure::handle(action, ctx, flags),
        Commands::Layers(args) => commands::layers::handle(args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
