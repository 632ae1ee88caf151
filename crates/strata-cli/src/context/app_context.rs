use std::path::Path;

use anyhow::Context;
use strata_config::StrataConfig;
use strata_core::entities::{GridConfig, SiteContext};
use strata_store::JsonlRepository;

use crate::cli::subcommands::GeometryArgs;

/// What a command works against: the loaded config and the local store.
pub struct AppContext {
    pub config: StrataConfig,
    pub repo: JsonlRepository,
}

impl AppContext {
    pub fn init(project_root: &Path, config: StrataConfig) -> anyhow::Result<Self> {
        let data_dir = config.data_dir(project_root);
        let repo = JsonlRepository::open(&data_dir)
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
        Ok(Self { config, repo })
    }

    /// Configured site id, if any.
    pub fn default_site_id(&self) -> Option<String> {
        self.config.site.site_id().map(str::to_string)
    }

    /// Site context from config with command-line overrides applied.
    pub fn site_context(&self, overrides: &GeometryArgs) -> anyhow::Result<SiteContext> {
        site_context_with(&self.config, overrides)
    }
}

pub(crate) fn site_context_with(
    config: &StrataConfig,
    overrides: &GeometryArgs,
) -> anyhow::Result<SiteContext> {
    let mut site = match (overrides.lat, overrides.lng) {
        (Some(lat), Some(lng)) => {
            let origin = strata_core::Coordinate::try_new(lat, lng)?;
            let mut site = SiteContext::new(origin, config.grid.geometry());
            site.site_id = config.site.site_id().map(str::to_string);
            site
        }
        _ => config.site_context().context(
            "no site origin: pass --lat/--lng or set [site] origin_lat/origin_lng in .strata/config.toml",
        )?,
    };

    let GridConfig {
        cell_size,
        rows,
        cols,
        orientation,
    } = site.grid;
    site.grid = GridConfig {
        cell_size: overrides.size.unwrap_or(cell_size),
        rows: overrides.rows.unwrap_or(rows),
        cols: overrides.cols.unwrap_or(cols),
        orientation: overrides.orientation.unwrap_or(orientation),
    };
    if let Some(site_id) = &overrides.site {
        site.site_id = Some(site_id.clone());
    }
    Ok(site)
}
