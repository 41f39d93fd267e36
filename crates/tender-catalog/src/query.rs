//! Catalog query engine: filters, substring search, and pagination.
//!
//! A query is a single linear pass over the store:
//!
//! 1. category (case-insensitive exact tag match)
//! 2. publisher type (via the installed [`PublisherClassifier`])
//! 3. status
//! 4. search text (lowercased substring of title or description)
//!
//! Survivors keep store order. The page is then sliced out of them; a page
//! past the end is empty rather than an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tender_core::entities::TenderRecord;
use tender_core::enums::{PublisherType, TenderStatus};

use crate::classify::PublisherClassifier;
use crate::error::CatalogError;
use crate::store::TenderStore;

/// Page size used when the caller does not pick one; shared with `[query]`.
pub use tender_config::DEFAULT_PAGE_SIZE;

/// Filter values meaning "no filter on this dimension".
const ALL_LABELS: &[&str] = &["all", "כל הקטגוריות", "כל המפרסמים", "כל הסטטוסים"];

fn is_all_label(raw: &str) -> bool {
    let normalized = raw.trim().to_lowercase();
    normalized.is_empty() || ALL_LABELS.contains(&normalized.as_str())
}

/// Parameters supplied by the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParameters {
    /// Category tag; `None` or `"all"` matches every record.
    pub category: Option<String>,
    pub publisher: Option<PublisherType>,
    pub status: Option<TenderStatus>,
    /// Free text; `None` or blank disables the search step.
    pub search_text: Option<String>,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            category: None,
            publisher: None,
            status: None,
            search_text: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParameters {
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub const fn with_publisher(mut self, publisher: PublisherType) -> Self {
        self.publisher = Some(publisher);
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: TenderStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    #[must_use]
    pub const fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Check the pagination cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidParameter`] if `page_size` or `page` is zero.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::invalid("page_size", "must be greater than zero"));
        }
        if self.page == 0 {
            return Err(CatalogError::invalid("page", "pages are numbered from 1"));
        }
        Ok(())
    }

    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !is_all_label(category))
            .map(str::trim)
    }

    fn search_needle(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase)
    }
}

/// Parse a category filter from UI text. `"all"` and blank become `None`.
#[must_use]
pub fn parse_category_filter(raw: &str) -> Option<String> {
    (!is_all_label(raw)).then(|| raw.trim().to_string())
}

/// Parse a status filter from its name, Hebrew label, or an "all" label.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidParameter`] for an unrecognized status.
pub fn parse_status_filter(raw: &str) -> Result<Option<TenderStatus>, CatalogError> {
    if is_all_label(raw) {
        return Ok(None);
    }
    TenderStatus::from_label(raw)
        .map(Some)
        .ok_or_else(|| CatalogError::invalid("status", format!("unknown status '{raw}'")))
}

/// Parse a publisher-type filter from its name, Hebrew label, or an "all" label.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidParameter`] for an unrecognized publisher type.
pub fn parse_publisher_filter(raw: &str) -> Result<Option<PublisherType>, CatalogError> {
    if is_all_label(raw) {
        return Ok(None);
    }
    PublisherType::from_label(raw).map(Some).ok_or_else(|| {
        CatalogError::invalid("publisher", format!("unknown publisher type '{raw}'"))
    })
}

/// One page of query results.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a TenderRecord>,
    /// Number of records that passed every filter.
    pub total_count: usize,
    /// `ceil(total_count / page_size)`.
    pub page_count: usize,
    pub page: u32,
    pub page_size: u32,
}

impl QueryPage<'_> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        (self.page as usize) < self.page_count
    }
}

/// Stateless query engine over a shared store.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<TenderStore>,
    classifier: Option<Arc<dyn PublisherClassifier>>,
}

impl std::fmt::Debug for QueryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("records", &self.store.len())
            .field("classifier", &self.classifier.is_some())
            .finish()
    }
}

impl QueryEngine {
    /// Engine without a publisher classifier.
    #[must_use]
    pub const fn new(store: Arc<TenderStore>) -> Self {
        Self {
            store,
            classifier: None,
        }
    }

    /// Install a publisher classifier for the publisher filter.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl PublisherClassifier + 'static) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    #[must_use]
    pub fn store(&self) -> &TenderStore {
        &self.store
    }

    /// Run a query against the store.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidParameter`] if the pagination cursor is
    /// invalid. Filters that match nothing produce an empty page.
    pub fn query(&self, params: &QueryParameters) -> Result<QueryPage<'_>, CatalogError> {
        params.validate()?;

        let category = params.category_filter();
        let needle = params.search_needle();

        let matched: Vec<&TenderRecord> = self
            .store
            .get_all()
            .iter()
            .filter(|record| category.is_none_or(|tag| record.has_category(tag)))
            .filter(|record| {
                params
                    .publisher
                    .is_none_or(|wanted| self.publisher_matches(record, wanted))
            })
            .filter(|record| params.status.is_none_or(|status| record.status == status))
            .filter(|record| {
                needle
                    .as_deref()
                    .is_none_or(|needle| text_matches(record, needle))
            })
            .collect();

        let page_size = params.page_size as usize;
        let total_count = matched.len();
        let page_count = total_count.div_ceil(page_size);
        let start = (params.page as usize - 1).saturating_mul(page_size);

        let items: Vec<&TenderRecord> = matched.into_iter().skip(start).take(page_size).collect();

        tracing::debug!(
            total_count,
            page_count,
            page = params.page,
            returned = items.len(),
            "catalog query"
        );

        Ok(QueryPage {
            items,
            total_count,
            page_count,
            page: params.page,
            page_size: params.page_size,
        })
    }

    fn publisher_matches(&self, record: &TenderRecord, wanted: PublisherType) -> bool {
        self.classifier
            .as_ref()
            .and_then(|classifier| classifier.classify(record))
            == Some(wanted)
    }
}

/// `needle` must already be lowercased.
fn text_matches(record: &TenderRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}
