//! Publisher-type classification.
//!
//! The catalog does not store a publisher type; the listing's publisher filter
//! goes through a [`PublisherClassifier`]. Without one, only the unset ("all")
//! publisher filter matches anything.

use tender_config::PublishersConfig;
use tender_core::entities::TenderRecord;
use tender_core::enums::PublisherType;

/// Maps a tender to the publisher group it belongs to, if any.
pub trait PublisherClassifier: Send + Sync {
    fn classify(&self, record: &TenderRecord) -> Option<PublisherType>;
}

impl<F> PublisherClassifier for F
where
    F: Fn(&TenderRecord) -> Option<PublisherType> + Send + Sync,
{
    fn classify(&self, record: &TenderRecord) -> Option<PublisherType> {
        self(record)
    }
}

/// Substring rules over the lowercased publisher name.
///
/// Rules are checked in list order and the first type with a matching keyword
/// wins.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    rules: Vec<(PublisherType, Vec<String>)>,
}

impl KeywordClassifier {
    /// Build from explicit `(type, keywords)` rules. Blank keywords are dropped.
    #[must_use]
    pub fn new(rules: Vec<(PublisherType, Vec<String>)>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(kind, keywords)| {
                let keywords = keywords
                    .iter()
                    .map(|keyword| keyword.trim().to_lowercase())
                    .filter(|keyword| !keyword.is_empty())
                    .collect::<Vec<_>>();
                (kind, keywords)
            })
            .filter(|(_, keywords)| !keywords.is_empty())
            .collect();
        Self { rules }
    }

    /// Build from configuration.
    ///
    /// Returns `None` when the classifier is disabled or has no rules, which
    /// leaves the query engine without a classifier.
    #[must_use]
    pub fn from_config(config: &PublishersConfig) -> Option<Self> {
        if !config.enabled || config.has_no_rules() {
            return None;
        }
        Some(Self::new(vec![
            (PublisherType::PublicCompany, config.public_company.clone()),
            (PublisherType::Municipal, config.municipal.clone()),
            (PublisherType::Government, config.government.clone()),
            (PublisherType::Private, config.private.clone()),
        ]))
    }

    /// Classify a raw publisher name.
    #[must_use]
    pub fn classify_name(&self, publisher: &str) -> Option<PublisherType> {
        let haystack = publisher.to_lowercase();
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k.as_str())))
            .map(|(kind, _)| *kind)
    }
}

impl PublisherClassifier for KeywordClassifier {
    fn classify(&self, record: &TenderRecord) -> Option<PublisherType> {
        self.classify_name(&record.publisher)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn default_classifier() -> KeywordClassifier {
        KeywordClassifier::from_config(&PublishersConfig::default()).expect("defaults enabled")
    }

    #[rstest]
    #[case("המשרד לביטחון לאומי - שירות בתי הסוהר", Some(PublisherType::Government))]
    #[case("משרד האוצר - מינהל הרכש הממשלתי", Some(PublisherType::Government))]
    #[case("משרד החינוך", Some(PublisherType::Government))]
    #[case("עיריית תל אביב-יפו", Some(PublisherType::Municipal))]
    #[case("מועצה אזורית גליל עליון", Some(PublisherType::Municipal))]
    #[case("רכבת ישראל", Some(PublisherType::PublicCompany))]
    #[case("רשות שדות התעופה", Some(PublisherType::PublicCompany))]
    #[case("נגריית הגליל בע\"מ", Some(PublisherType::Private))]
    #[case("Woodworks LTD", Some(PublisherType::Private))]
    #[case("עמותת ידידים", None)]
    fn default_rules_classify_sample_publishers(
        #[case] publisher: &str,
        #[case] expected: Option<PublisherType>,
    ) {
        assert_eq!(default_classifier().classify_name(publisher), expected);
    }

    #[test]
    fn public_company_beats_government_keywords() {
        // contains both "חברה ממשלתית" and "משרד"
        let name = "חברה ממשלתית בפיקוח משרד התחבורה";
        assert_eq!(
            default_classifier().classify_name(name),
            Some(PublisherType::PublicCompany)
        );
    }

    #[test]
    fn disabled_config_yields_no_classifier() {
        let config = PublishersConfig {
            enabled: false,
            ..PublishersConfig::default()
        };
        assert!(KeywordClassifier::from_config(&config).is_none());
    }

    #[test]
    fn blank_keywords_are_ignored() {
        let classifier = KeywordClassifier::new(vec![(
            PublisherType::Private,
            vec!["  ".to_string(), String::new()],
        )]);
        assert_eq!(classifier.classify_name("anything"), None);
    }

    #[test]
    fn closures_are_classifiers() {
        let record = crate::test_support::tender("a", "title", &[]);
        let always_private = |_: &TenderRecord| Some(PublisherType::Private);
        assert_eq!(always_private.classify(&record), Some(PublisherType::Private));
    }
}
