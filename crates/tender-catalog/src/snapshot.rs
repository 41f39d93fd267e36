//! Populate a [`TenderStore`] from a merged JSON tender export.
//!
//! The export is a JSON array of loosely-typed objects as produced by the
//! tender collectors: dates in `DD/MM/YYYY`, Hebrew status labels, and
//! `contact`/`documents`/`categories` that may be nested JSON or JSON encoded
//! as a string. Loading is lenient per entry and strict for the file:
//!
//! - an unreadable file or a non-array document is an error;
//! - an entry without an id, a title or valid dates, or with a wrongly typed
//!   field, is skipped with a warning;
//! - entries sharing `(title, publisher)` collapse to the more complete one;
//! - a repeated id after that is dropped (first wins).

use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tender_core::date_serde::parse_date;
use tender_core::entities::{Contact, TenderDocument, TenderRecord};
use tender_core::enums::TenderStatus;

use crate::error::CatalogError;
use crate::store::TenderStore;

/// Inputs for status derivation while loading.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotOptions {
    /// Reference date for entries without a recognizable status.
    pub today: NaiveDate,
    pub closing_soon_days: u32,
}

/// Outcome of parsing a snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotLoad {
    /// Surviving records in first-seen order.
    pub records: Vec<TenderRecord>,
    /// Entries dropped for missing or invalid fields.
    pub skipped: usize,
    /// Entries merged away by `(title, publisher)` or id deduplication.
    pub duplicates: usize,
}

impl SnapshotLoad {
    /// Build the store from the surviving records.
    ///
    /// # Errors
    ///
    /// Propagates [`TenderStore::new`] validation errors.
    pub fn into_store(self) -> Result<TenderStore, CatalogError> {
        TenderStore::new(self.records)
    }
}

/// Raw export entry. Every field is optional; conversion decides what is fatal.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotEntry {
    id: Option<Value>,
    source: Option<String>,
    title: Option<String>,
    publisher: Option<String>,
    publish_date: Option<String>,
    #[serde(alias = "submission_deadline")]
    submission_date: Option<String>,
    status: Option<String>,
    #[serde(alias = "details_url")]
    url: Option<String>,
    #[serde(alias = "full_description")]
    description: Option<String>,
    requirements: Option<String>,
    contact: Option<Value>,
    documents: Option<Value>,
    categories: Option<Value>,
}

/// Read and parse a snapshot file into a store.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read,
/// [`CatalogError::Json`] if it is not a JSON array, and
/// [`CatalogError::Core`] if the surviving records fail store validation.
pub fn load_snapshot(path: &Path, options: &SnapshotOptions) -> Result<TenderStore, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let load = parse_snapshot(&raw, options)?;
    tracing::info!(
        path = %path.display(),
        records = load.records.len(),
        skipped = load.skipped,
        duplicates = load.duplicates,
        "tender snapshot loaded"
    );
    load.into_store()
}

/// Parse snapshot JSON text.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] if the text is not a JSON array. Entries
/// with wrongly typed fields are skipped like any other invalid entry.
pub fn parse_snapshot(json: &str, options: &SnapshotOptions) -> Result<SnapshotLoad, CatalogError> {
    let entries: Vec<Value> = serde_json::from_str(json)?;
    let total = entries.len();

    let mut skipped = 0usize;
    let mut records: Vec<TenderRecord> = Vec::with_capacity(total);
    let mut by_key: HashMap<(String, String), usize> = HashMap::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let converted = serde_json::from_value::<SnapshotEntry>(entry)
            .map_err(|error| format!("malformed entry: {error}"))
            .and_then(|entry| convert(entry, options));
        let record = match converted {
            Ok(record) => record,
            Err(reason) => {
                tracing::warn!(index, %reason, "skipping snapshot entry");
                skipped += 1;
                continue;
            }
        };

        let key = (record.title.clone(), record.publisher.clone());
        match by_key.get(&key).copied() {
            Some(slot) => {
                if completeness(&record) > completeness(&records[slot]) {
                    records[slot] = record;
                }
            }
            None => {
                by_key.insert(key, records.len());
                records.push(record);
            }
        }
    }

    let mut seen_ids = HashSet::new();
    records.retain(|record| {
        let fresh = seen_ids.insert(record.id.clone());
        if !fresh {
            tracing::warn!(id = %record.id, "dropping snapshot entry with repeated id");
        }
        fresh
    });

    let duplicates = total - skipped - records.len();
    Ok(SnapshotLoad {
        records,
        skipped,
        duplicates,
    })
}

fn convert(entry: SnapshotEntry, options: &SnapshotOptions) -> Result<TenderRecord, String> {
    let id = entry
        .id
        .as_ref()
        .and_then(id_text)
        .ok_or_else(|| "missing id".to_string())?;
    let title =
        non_blank(entry.title).ok_or_else(|| format!("tender {id}: missing title"))?;
    let publish_date = entry
        .publish_date
        .as_deref()
        .and_then(parse_date)
        .ok_or_else(|| format!("tender {id}: missing or invalid publish date"))?;
    let submission_deadline = entry
        .submission_date
        .as_deref()
        .and_then(parse_date)
        .ok_or_else(|| format!("tender {id}: missing or invalid submission date"))?;

    let status = entry
        .status
        .as_deref()
        .and_then(TenderStatus::from_label)
        .unwrap_or_else(|| {
            TenderStatus::for_deadline(submission_deadline, options.today, options.closing_soon_days)
        });

    let record = TenderRecord {
        id,
        title,
        publisher: entry.publisher.unwrap_or_default().trim().to_string(),
        publish_date,
        submission_deadline,
        status,
        categories: entry.categories.map(categories_from).unwrap_or_default(),
        description: entry.description.unwrap_or_default().trim().to_string(),
        requirements: entry.requirements.unwrap_or_default().trim().to_string(),
        contact: entry.contact.map(contact_from).unwrap_or_default(),
        documents: entry.documents.map(documents_from).unwrap_or_default(),
        source: non_blank(entry.source),
        url: non_blank(entry.url),
    };
    record.validate().map_err(|error| error.to_string())?;
    Ok(record)
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(Some(s.clone())),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Nested values sometimes arrive as JSON text; decode those once.
fn decode_embedded(value: Value) -> Value {
    match value {
        Value::String(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
        other => other,
    }
}

fn categories_from(value: Value) -> Vec<String> {
    let tags: Vec<String> = match decode_embedded(value) {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(single) => vec![single],
        _ => Vec::new(),
    };

    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty() && seen.insert(tag.to_lowercase()))
        .collect()
}

fn contact_from(value: Value) -> Contact {
    match decode_embedded(value) {
        Value::Object(map) => {
            let field = |name: &str| {
                map.get(name)
                    .and_then(Value::as_str)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default()
            };
            Contact {
                name: field("name"),
                email: field("email"),
                phone: field("phone"),
            }
        }
        Value::String(name) => Contact {
            name: name.trim().to_string(),
            ..Contact::default()
        },
        _ => Contact::default(),
    }
}

fn documents_from(value: Value) -> Vec<TenderDocument> {
    match decode_embedded(value) {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<TenderDocument>(item).ok())
            .filter(|doc| !doc.name.trim().is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Number of populated optional fields; used to pick between duplicates.
fn completeness(record: &TenderRecord) -> usize {
    [
        !record.publisher.is_empty(),
        !record.description.is_empty(),
        !record.requirements.is_empty(),
        !record.categories.is_empty(),
        !record.contact.is_empty(),
        !record.documents.is_empty(),
        record.source.is_some(),
        record.url.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}
