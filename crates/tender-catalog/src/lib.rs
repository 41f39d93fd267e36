//! # tender-catalog
//!
//! The tender catalog: a read-only in-memory store and the query engine that
//! the listing page drives.
//!
//! - [`store`] holds validated [`TenderRecord`](tender_core::entities::TenderRecord)s in ingestion order
//! - [`snapshot`] populates a store from a merged JSON export
//! - [`classify`] maps publishers to [`PublisherType`](tender_core::enums::PublisherType)s
//! - [`query`] filters, searches and paginates the store

pub mod classify;
pub mod error;
pub mod query;
pub mod snapshot;
pub mod store;

pub use classify::{KeywordClassifier, PublisherClassifier};
pub use error::CatalogError;
pub use query::{QueryEngine, QueryPage, QueryParameters};
pub use snapshot::{SnapshotLoad, SnapshotOptions};
pub use store::TenderStore;
