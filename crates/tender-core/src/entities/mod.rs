//! Entity structs for the tenders catalog.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod contact;
mod tender;

pub use contact::{Contact, TenderDocument};
pub use tender::TenderRecord;
