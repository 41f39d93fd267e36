use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::date_serde;
use crate::entities::{Contact, TenderDocument};
use crate::enums::TenderStatus;
use crate::errors::CoreError;

/// A published procurement notice in the carpentry/woodworking domain.
///
/// Records are immutable once placed in the catalog store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TenderRecord {
    pub id: String,
    pub title: String,
    pub publisher: String,
    #[serde(with = "date_serde::flexible")]
    #[schemars(with = "String")]
    pub publish_date: NaiveDate,
    #[serde(with = "date_serde::flexible")]
    #[schemars(with = "String")]
    pub submission_deadline: NaiveDate,
    pub status: TenderStatus,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub documents: Vec<TenderDocument>,
    /// Site the notice was collected from (e.g. `govi.co.il`).
    #[serde(default)]
    pub source: Option<String>,
    /// Link to the original notice.
    #[serde(default)]
    pub url: Option<String>,
}

impl TenderRecord {
    /// Check the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the id or title is blank, the
    /// submission deadline precedes the publish date, or a category tag
    /// repeats (case-insensitive).
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "tender '{}' has an empty id",
                self.title
            )));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "tender {} has an empty title",
                self.id
            )));
        }
        if self.submission_deadline < self.publish_date {
            return Err(CoreError::Validation(format!(
                "tender {}: submission deadline {} precedes publish date {}",
                self.id, self.submission_deadline, self.publish_date
            )));
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.categories.len());
        for category in &self.categories {
            let key = category.trim().to_lowercase();
            if seen.contains(&key) {
                return Err(CoreError::Validation(format!(
                    "tender {}: duplicate category '{category}'",
                    self.id
                )));
            }
            seen.push(key);
        }
        Ok(())
    }

    /// Case-insensitive exact match against the record's category tags.
    #[must_use]
    pub fn has_category(&self, tag: &str) -> bool {
        let wanted = tag.trim().to_lowercase();
        self.categories
            .iter()
            .any(|category| category.trim().to_lowercase() == wanted)
    }
}
