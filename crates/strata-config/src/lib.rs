//! # strata-config
//!
//! Layered configuration loading for Strata using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STRATA_*` prefix, `__` as separator)
//! 2. Project-level `.strata/config.toml`
//! 3. User-level `~/.config/strata/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `STRATA_SITE__ORIGIN_LAT` -> `site.origin_lat`,
//! `STRATA_GRID__CELL_SIZE` -> `grid.cell_size`, and so on.
//!
//! ```no_run
//! use strata_config::StrataConfig;
//!
//! let config = StrataConfig::load_with_dotenv().expect("config");
//! if let Ok(site) = config.site_context() {
//!     println!("grid origin: {}", site.origin);
//! }
//! ```

mod error;
mod general;
mod grid;
mod site;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use grid::GridConfig;
pub use site::SiteConfig;
pub use store::StoreConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use strata_core::entities::SiteContext;

/// Project-relative location of the project config file.
pub const PROJECT_CONFIG_PATH: &str = ".strata/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StrataConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl StrataConfig {
    /// Load configuration from TOML files and `STRATA_*` environment variables,
    /// relative to the current directory.
    ///
    /// Does NOT call `dotenvy`; use [`StrataConfig::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Like [`StrataConfig::load`], reading the project file under `project_root`.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        Self::figment_for(project_root)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// The provider chain with the project file resolved under `project_root`.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = project_root.join(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("STRATA_").split("__"))
    }

    /// The explicit site context handed to the grid generator.
    ///
    /// # Errors
    ///
    /// `NotConfigured` when the site origin is missing or out of range,
    /// `InvalidValue` when the grid section would be rejected.
    pub fn site_context(&self) -> Result<SiteContext, ConfigError> {
        let origin = self.site.origin().ok_or_else(|| ConfigError::NotConfigured {
            section: "site".to_string(),
        })?;
        self.grid.validate()?;

        let mut context = SiteContext::new(origin, self.grid.geometry());
        if let Some(id) = self.site.site_id() {
            context = context.with_site_id(id);
        }
        if !self.site.name.is_empty() {
            context.name = Some(self.site.name.clone());
        }
        Ok(context)
    }

    /// Data directory, resolved against `project_root` when relative.
    pub fn data_dir(&self, project_root: &Path) -> PathBuf {
        if self.store.data_dir.is_absolute() {
            self.store.data_dir.clone()
        } else {
            project_root.join(&self.store.data_dir)
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("strata").join("config.toml"))
    }
}
