//! Catalog error types.

use std::path::PathBuf;

use tender_core::CoreError;

/// Errors from store construction, snapshot loading, and queries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Bad pagination or filter argument supplied by the caller.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// No tender with the requested id.
    #[error("tender not found: {id}")]
    NotFound { id: String },

    /// A record violated an entity invariant.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not a JSON array of tender objects.
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
