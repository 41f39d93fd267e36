//! Status and publisher-type enums for tenders.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Each enum also carries the Hebrew label shown by the tender sites and the
//! listing page, and parses either form through `from_label()`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TenderStatus
// ---------------------------------------------------------------------------

/// Submission status of a tender.
///
/// ```text
/// open → closing_soon → closed
/// ```
///
/// Records carry an explicit status; [`TenderStatus::for_deadline`] derives one
/// when the source did not provide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TenderStatus {
    Open,
    ClosingSoon,
    Closed,
}

impl TenderStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::ClosingSoon, Self::Closed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::ClosingSoon => "closing_soon",
            Self::Closed => "closed",
        }
    }

    /// Hebrew label used on the listing page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "פתוח להגשה",
            Self::ClosingSoon => "נסגר בקרוב",
            Self::Closed => "סגור",
        }
    }

    /// Parse a status from its `snake_case` name or its Hebrew label.
    ///
    /// Accepts the short form `פתוח` that some sources print instead of the
    /// full "open for submission" label. Returns `None` for anything else,
    /// including the sites' "not specified" placeholder.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let normalized = trimmed.to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "open" | "פתוח להגשה" | "פתוח" => Some(Self::Open),
            "closing_soon" | "נסגר בקרוב" => Some(Self::ClosingSoon),
            "closed" | "סגור" => Some(Self::Closed),
            _ => None,
        }
    }

    /// Derive a status from the submission deadline.
    ///
    /// A tender is closed once `today` is past the deadline, closing soon when
    /// the deadline is at most `closing_soon_days` away, and open otherwise.
    #[must_use]
    pub fn for_deadline(deadline: NaiveDate, today: NaiveDate, closing_soon_days: u32) -> Self {
        if today > deadline {
            return Self::Closed;
        }
        let remaining = deadline.signed_duration_since(today).num_days();
        if remaining <= i64::from(closing_soon_days) {
            Self::ClosingSoon
        } else {
            Self::Open
        }
    }
}

impl fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PublisherType
// ---------------------------------------------------------------------------

/// Informal grouping of tender publishers, as offered by the publisher filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PublisherType {
    Government,
    Municipal,
    PublicCompany,
    Private,
}

impl PublisherType {
    pub const ALL: [Self; 4] = [
        Self::Government,
        Self::Municipal,
        Self::PublicCompany,
        Self::Private,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Municipal => "municipal",
            Self::PublicCompany => "public_company",
            Self::Private => "private",
        }
    }

    /// Hebrew label of the publisher filter button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Government => "משרדי ממשלה",
            Self::Municipal => "רשויות מקומיות",
            Self::PublicCompany => "חברות ממשלתיות",
            Self::Private => "חברות פרטיות",
        }
    }

    /// Parse a publisher type from its `snake_case` name or its Hebrew label.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized || kind.label() == normalized)
    }
}

impl fmt::Display for PublisherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
