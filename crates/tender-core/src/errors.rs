//! Cross-cutting error types for the tenders catalog.
//!
//! Domain-specific errors (e.g. `CatalogError`, `ConfigError`) live in their
//! own crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised by the core entity types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
