//! Listing/pagination defaults.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of tender cards per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Upper bound applied to caller-supplied page sizes.
const fn default_max_page_size() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl QueryConfig {
    /// Check that both sizes are positive and consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "query.max_page_size".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "query.default_page_size".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::InvalidValue {
                field: "query.default_page_size".to_string(),
                reason: format!("exceeds max_page_size ({})", self.max_page_size),
            });
        }
        Ok(())
    }

    /// Page size with precedence: explicit request -> configured default,
    /// capped at `max_page_size`.
    ///
    /// An explicit zero is passed through untouched so the query engine can
    /// reject it.
    #[must_use]
    pub fn effective_page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}
