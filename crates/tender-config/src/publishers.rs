//! Publisher-type keyword rules.
//!
//! Each list holds substrings matched against the lowercased publisher name.
//! Types are checked in the order public company, municipal, government,
//! private, so "חברה ממשלתית" is not swallowed by a government keyword.

use serde::{Deserialize, Serialize};

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

fn default_government() -> Vec<String> {
    keywords(&[
        "משרד",
        "מינהל",
        "שירות בתי הסוהר",
        "משטרת ישראל",
        "צה\"ל",
        "ministry",
    ])
}

fn default_municipal() -> Vec<String> {
    keywords(&[
        "עיריית",
        "עירייה",
        "מועצה",
        "מועצת",
        "רשות מקומית",
        "municipality",
    ])
}

fn default_public_company() -> Vec<String> {
    keywords(&[
        "חברה ממשלתית",
        "חברת החשמל",
        "רכבת ישראל",
        "מקורות",
        "נתיבי ישראל",
        "רשות שדות התעופה",
        "דואר ישראל",
    ])
}

fn default_private() -> Vec<String> {
    keywords(&["בע\"מ", "בעמ", "ltd"])
}

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublishersConfig {
    /// Install the keyword classifier. When disabled, only the "all"
    /// publisher filter matches records.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_government")]
    pub government: Vec<String>,

    #[serde(default = "default_municipal")]
    pub municipal: Vec<String>,

    #[serde(default = "default_public_company")]
    pub public_company: Vec<String>,

    #[serde(default = "default_private")]
    pub private: Vec<String>,
}

impl Default for PublishersConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            government: default_government(),
            municipal: default_municipal(),
            public_company: default_public_company(),
            private: default_private(),
        }
    }
}

impl PublishersConfig {
    /// True when every keyword list is empty.
    #[must_use]
    pub fn has_no_rules(&self) -> bool {
        self.government.is_empty()
            && self.municipal.is_empty()
            && self.public_company.is_empty()
            && self.private.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_enabled_with_rules() {
        let config = PublishersConfig::default();
        assert!(config.enabled);
        assert!(!config.has_no_rules());
        assert!(config.government.iter().any(|k| k == "משרד"));
        assert!(config.municipal.iter().any(|k| k == "עיריית"));
    }

    #[test]
    fn empty_lists_have_no_rules() {
        let config = PublishersConfig {
            enabled: true,
            government: Vec::new(),
            municipal: Vec::new(),
            public_company: Vec::new(),
            private: Vec::new(),
        };
        assert!(config.has_no_rules());
    }
}
