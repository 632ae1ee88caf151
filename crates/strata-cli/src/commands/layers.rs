use std::collections::BTreeMap;

use strata_core::entities::{FindingLocation, GridSystem, MapLayer};
use strata_core::enums::LayerType;
use strata_core::responses::LayersResponse;
use strata_grid::GridGenerator;
use strata_layers::{LayerSource, compose, default_layers, hidden_ids, toggle};
use strata_store::SiteRepository;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LayersArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `strata layers`.
pub fn handle(args: &LayersArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let site_id = args.site.clone().or_else(|| ctx.default_site_id());
    let sites: Vec<String> = site_id.iter().cloned().collect();
    let findings: Vec<FindingLocation> = match &site_id {
        Some(id) => ctx.repo.list_findings_by_site(id)?,
        None => Vec::new(),
    };
    let grid: Option<GridSystem> = match ctx.config.site_context() {
        Ok(site) => Some(GridGenerator::generate_for_site(&site)?),
        Err(error) => {
            tracing::debug!(%error, "no site grid for the grid layer");
            None
        }
    };

    let mut sources: BTreeMap<LayerType, &dyn LayerSource> = BTreeMap::new();
    sources.insert(LayerType::Sites, &sites);
    sources.insert(LayerType::Findings, &findings);
    if let Some(grid) = &grid {
        sources.insert(LayerType::Grid, grid);
    }

    let layers = toggled_catalog(&args.toggle)?;
    let response = LayersResponse {
        layers: compose(&layers, &sources),
        hidden: hidden_ids(&layers),
    };
    output(&response, flags.format)
}

fn toggled_catalog(toggles: &[String]) -> anyhow::Result<Vec<MapLayer>> {
    let mut layers = default_layers();
    for id in toggles {
        toggle(&mut layers, id)?;
    }
    Ok(layers)
}
