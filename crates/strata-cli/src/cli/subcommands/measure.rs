use clap::{Args, Subcommand};
use strata_core::Coordinate;

/// Measurement commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MeasureCommands {
    /// Record a single point.
    Point(MeasureArgs),
    /// Great-circle distance between two points.
    Distance(MeasureArgs),
    /// Initial bearing from the first point to the second.
    Bearing(MeasureArgs),
    /// Area of the polygon through three or more points.
    Area(MeasureArgs),
    /// Length of a multi-leg path.
    Path(PathArgs),
    /// List saved measurements.
    List {
        #[arg(long)]
        site: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a saved measurement by ID.
    Get { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct MeasureArgs {
    /// A clicked point as `LAT,LNG` (repeatable, in click order).
    #[arg(
        long = "at",
        value_name = "LAT,LNG",
        required = true,
        allow_hyphen_values = true
    )]
    pub at: Vec<Coordinate>,
    /// Site the measurement belongs to (defaults to `[site] id`).
    #[arg(long)]
    pub site: Option<String>,
    /// Persist the measurement.
    #[arg(long)]
    pub save: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PathArgs {
    /// Path vertices as `LAT,LNG` (repeatable, at least two).
    #[arg(
        long = "at",
        value_name = "LAT,LNG",
        required = true,
        allow_hyphen_values = true
    )]
    pub at: Vec<Coordinate>,
}
