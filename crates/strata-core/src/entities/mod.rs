//! Entity structs for all Strata domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod binning;
mod finding_location;
mod grid;
mod layer;
mod measurement;
mod site;

pub use binning::{BinningReport, CellAggregate, InvalidDepthWarning, UnassignedFindingWarning};
pub use finding_location::FindingLocation;
pub use grid::{CellBounds, GridCell, GridSystem, SoilLayer};
pub use layer::{MapLayer, RenderableLayer};
pub use measurement::Measurement;
pub use site::{GridConfig, SiteContext};
