use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contact person for questions about a tender.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl Contact {
    /// True when no contact detail was provided.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// A downloadable tender document (terms, technical spec, price form).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TenderDocument {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
