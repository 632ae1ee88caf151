use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Grid commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GridCommands {
    /// Generate the site grid.
    Generate(GenerateArgs),
    /// Bin finding locations into the grid cells.
    Bin(BinArgs),
    /// Record depth, status, soil layers or notes on one cell.
    Cell(CellArgs),
}

/// Grid geometry overrides. Anything left out comes from the `[site]` and
/// `[grid]` config sections.
#[derive(Clone, Debug, Default, Args)]
pub struct GeometryArgs {
    /// Origin latitude.
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    pub lat: Option<f64>,
    /// Origin longitude.
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lng: Option<f64>,
    /// Cell side length in meters.
    #[arg(long)]
    pub size: Option<f64>,
    #[arg(long)]
    pub rows: Option<u32>,
    #[arg(long)]
    pub cols: Option<u32>,
    /// Degrees clockwise from north.
    #[arg(long, allow_negative_numbers = true)]
    pub orientation: Option<f64>,
    /// Site id the grid belongs to.
    #[arg(long)]
    pub site: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,
    /// Persist every cell as a grid unit.
    #[arg(long)]
    pub save: bool,
}

#[derive(Clone, Debug, Args)]
pub struct BinArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,
    /// JSON array of finding locations; defaults to the site's stored findings.
    #[arg(long)]
    pub findings: Option<PathBuf>,
    /// Write the aggregates back into the stored grid units and record the
    /// `--findings` locations under the site.
    #[arg(long)]
    pub save: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CellArgs {
    /// Cell label, e.g. `B3`.
    pub label: String,
    #[command(flatten)]
    pub geometry: GeometryArgs,
    /// Excavated depth in meters.
    #[arg(long)]
    pub depth: Option<f64>,
    /// New status: planned, active, completed.
    #[arg(long)]
    pub status: Option<String>,
    /// Depth of a soil layer to add.
    #[arg(long, requires = "layer_description")]
    pub layer_depth: Option<f64>,
    #[arg(long, requires = "layer_depth")]
    pub layer_description: Option<String>,
    /// Finding ids recovered from the added soil layer.
    #[arg(long, requires = "layer_depth")]
    pub layer_finding: Vec<String>,
    #[arg(long)]
    pub note: Option<String>,
}
