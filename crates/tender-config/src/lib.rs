//! # tender-config
//!
//! Layered configuration loading for the tenders catalog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TENDERS_*` prefix, `__` as separator)
//! 2. Project-level `.tenders/config.toml`
//! 3. User-level `~/.config/tenders/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TENDERS_CATALOG__SNAPSHOT_PATH` -> `catalog.snapshot_path`,
//! `TENDERS_QUERY__DEFAULT_PAGE_SIZE` -> `query.default_page_size`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tender_config::TenderConfig;
//!
//! let config = TenderConfig::load_with_dotenv().expect("config");
//!
//! if config.catalog.is_configured() {
//!     println!("snapshot: {}", config.catalog.snapshot_path);
//! }
//! ```

mod catalog;
mod error;
mod publishers;
mod query;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use publishers::PublishersConfig;
pub use query::{DEFAULT_PAGE_SIZE, QueryConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "TENDERS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TenderConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub publishers: PublishersConfig,
}

impl TenderConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse, or
    /// [`ConfigError::InvalidValue`] if the query section is inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.query.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tenders/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tenders").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TenderConfig::default();
        assert!(!config.catalog.is_configured());
        assert!(config.publishers.enabled);
        assert_eq!(config.query.default_page_size, 10);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = TenderConfig::from_figment(&TenderConfig::figment())
                .map_err(|e| e.to_string())?;
            assert!(!config.catalog.is_configured());
            assert_eq!(config.catalog.closing_soon_days, 7);
            assert_eq!(config.query.max_page_size, 100);
            Ok(())
        });
    }
}
