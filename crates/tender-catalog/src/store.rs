//! Read-only in-memory tender store.
//!
//! Records keep the order in which they were ingested; the query engine relies
//! on that order being stable.

use std::collections::HashSet;

use tender_core::entities::TenderRecord;

use crate::error::CatalogError;

/// The full catalog of tender records.
#[derive(Debug, Clone, Default)]
pub struct TenderStore {
    records: Vec<TenderRecord>,
}

impl TenderStore {
    /// Build a store, validating every record and rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Core`] with a validation message naming the
    /// first offending record.
    pub fn new(records: Vec<TenderRecord>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !ids.insert(record.id.as_str()) {
                return Err(tender_core::CoreError::Validation(format!(
                    "duplicate tender id {}",
                    record.id
                ))
                .into());
            }
        }
        tracing::debug!(records = records.len(), "tender store built");
        Ok(Self { records })
    }

    /// All records in ingestion order.
    #[must_use]
    pub fn get_all(&self) -> &[TenderRecord] {
        &self.records
    }

    /// Look up a single tender by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no record has that id.
    pub fn get(&self, id: &str) -> Result<&TenderRecord, CatalogError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Distinct category tags across the catalog, sorted by name.
    ///
    /// Tags differing only in case collapse to the first spelling seen.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories: Vec<String> = self
            .records
            .iter()
            .flat_map(|record| record.categories.iter())
            .filter(|tag| seen.insert(tag.trim().to_lowercase()))
            .map(|tag| tag.trim().to_string())
            .collect();
        categories.sort();
        categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
