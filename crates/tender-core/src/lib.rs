//! # tender-core
//!
//! Core types and error types for the carpentry tenders catalog.
//!
//! This crate provides the foundational types shared across all tender crates:
//! - The [`entities::TenderRecord`] entity and its contact/document parts
//! - Status and publisher-type enums with Hebrew label parsing
//! - Date serde helpers for the `DD/MM/YYYY` format used by Israeli tender sites
//! - Cross-cutting error types

pub mod date_serde;
pub mod entities;
pub mod enums;
pub mod errors;

pub use errors::CoreError;
