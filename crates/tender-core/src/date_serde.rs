//! Serde helpers for tender calendar dates.
//!
//! Israeli tender sites print dates as `DD/MM/YYYY`; exports and config use
//! ISO `YYYY-MM-DD`. [`flexible`] accepts both on input and always writes ISO.
//! Use with `#[serde(with = "date_serde::flexible")]` on struct fields.
//!
//! # Example
//! ```ignore
//! use tender_core::date_serde;
//! use chrono::NaiveDate;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "date_serde::flexible")]
//!     pub published: NaiveDate,
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// Output format for serialized dates.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Input formats tried in order.
const INPUT_FORMATS: &[&str] = &[ISO_FORMAT, "%d/%m/%Y", "%d.%m.%Y"];

/// Parse a date in any of the accepted input formats.
///
/// Returns `None` for blank strings, the sites' "not specified" placeholder,
/// and anything else that does not parse.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// `NaiveDate` as an ISO string, accepting `DD/MM/YYYY` on input.
pub mod flexible {
    use super::{Deserialize, Deserializer, ISO_FORMAT, NaiveDate, Serializer, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(ISO_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }
}
