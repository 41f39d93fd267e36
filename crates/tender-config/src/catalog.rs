//! Catalog source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default window, in days, in which an open tender counts as closing soon.
const fn default_closing_soon_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to the JSON tender snapshot (e.g. `data/all_tenders.json`).
    #[serde(default)]
    pub snapshot_path: String,

    /// Days before the deadline at which a derived status becomes `closing_soon`.
    #[serde(default = "default_closing_soon_days")]
    pub closing_soon_days: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot_path: String::new(),
            closing_soon_days: default_closing_soon_days(),
        }
    }
}

impl CatalogConfig {
    /// Whether a snapshot path has been provided.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.snapshot_path.trim().is_empty()
    }

    /// The snapshot path, or an error naming the missing section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `snapshot_path` is blank.
    pub fn snapshot_path(&self) -> Result<PathBuf, ConfigError> {
        if self.is_configured() {
            Ok(PathBuf::from(self.snapshot_path.trim()))
        } else {
            Err(ConfigError::NotConfigured {
                section: "catalog".to_string(),
            })
        }
    }
}
