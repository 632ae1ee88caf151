use anyhow::bail;
use schemars::{JsonSchema, Schema, schema_for};
use strata_core::Coordinate;
use strata_core::entities::{
    BinningReport, FindingLocation, GridCell, GridSystem, MapLayer, Measurement, RenderableLayer,
    SiteContext,
};
use strata_core::responses::{
    BinResponse, GridGenerateResponse, LayersResponse, MeasurementListResponse, PathResponse,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `strata schema`.
pub const SCHEMA_NAMES: &[&str] = &[
    "coordinate",
    "grid_cell",
    "grid_system",
    "finding_location",
    "binning_report",
    "measurement",
    "map_layer",
    "renderable_layer",
    "site_context",
    "grid_generate_response",
    "bin_response",
    "path_response",
    "measurement_list_response",
    "layers_response",
];

/// Handle `strata schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_by_name(&args.type_name)?, flags.format)
}

fn schema_by_name(name: &str) -> anyhow::Result<Schema> {
    Ok(match name.replace('-', "_").as_str() {
        "coordinate" => schema::<Coordinate>(),
        "grid_cell" => schema::<GridCell>(),
        "grid_system" => schema::<GridSystem>(),
        "finding_location" => schema::<FindingLocation>(),
        "binning_report" => schema::<BinningReport>(),
        "measurement" => schema::<Measurement>(),
        "map_layer" => schema::<MapLayer>(),
        "renderable_layer" => schema::<RenderableLayer>(),
        "site_context" => schema::<SiteContext>(),
        "grid_generate_response" => schema::<GridGenerateResponse>(),
        "bin_response" => schema::<BinResponse>(),
        "path_response" => schema::<PathResponse>(),
        "measurement_list_response" => schema::<MeasurementListResponse>(),
        "layers_response" => schema::<LayersResponse>(),
        _ => bail!(
            "unknown schema type '{name}'; expected one of: {}",
            SCHEMA_NAMES.join(", ")
        ),
    })
}

fn schema<T: JsonSchema>() -> Schema {
    schema_for!(T)
}
