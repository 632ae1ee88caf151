use clap::{Args, Subcommand};

use crate::cli::subcommands::{GridCommands, MeasureCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Excavation grid generation, binning and unit records.
    Grid {
        #[command(subcommand)]
        action: GridCommands,
    },
    /// Geodesic measurements.
    Measure {
        #[command(subcommand)]
        action: MeasureCommands,
    },
    /// Compose the thematic map layers of the site.
    Layers(LayersArgs),
    /// Print the JSON Schema of a Strata type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct LayersArgs {
    /// Flip the visibility of a layer (repeatable), e.g. `grid-layer`.
    #[arg(long)]
    pub toggle: Vec<String>,
    /// Site whose findings feed the findings layer (defaults to `[site] id`).
    #[arg(long)]
    pub site: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `measurement` or `grid_system`.
    pub type_name: String,
}
