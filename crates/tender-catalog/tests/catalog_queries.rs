//! End-to-end queries over the bundled sample snapshot.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tender_catalog::query::{parse_category_filter, parse_publisher_filter, parse_status_filter};
use tender_catalog::snapshot::load_snapshot;
use tender_catalog::{CatalogError, KeywordClassifier, QueryEngine, QueryParameters, SnapshotOptions};
use tender_config::PublishersConfig;
use tender_core::enums::{PublisherType, TenderStatus};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_tenders.json")
}

fn options() -> SnapshotOptions {
    SnapshotOptions {
        today: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        closing_soon_days: 7,
    }
}

#[fixture]
fn engine() -> QueryEngine {
    let store = load_snapshot(&fixture_path(), &options()).unwrap();
    let classifier = KeywordClassifier::from_config(&PublishersConfig::default()).unwrap();
    QueryEngine::new(Arc::new(store)).with_classifier(classifier)
}

fn ids(engine: &QueryEngine, params: &QueryParameters) -> Vec<String> {
    engine
        .query(params)
        .unwrap()
        .items
        .iter()
        .map(|record| record.id.clone())
        .collect()
}

#[rstest]
fn unfiltered_query_returns_everything(engine: QueryEngine) {
    let page = engine.query(&QueryParameters::default()).unwrap();
    assert_eq!(page.total_count, 4);
    assert_eq!(page.page_count, 1);
    assert!(!page.has_next());
}

#[rstest]
fn open_status_filter(engine: QueryEngine) {
    let params = QueryParameters::default().with_status(TenderStatus::Open);
    assert_eq!(ids(&engine, &params), vec!["1", "2", "3"]);
}

#[rstest]
fn closed_status_filter(engine: QueryEngine) {
    let params = QueryParameters::default().with_status(TenderStatus::Closed);
    let page = engine.query(&params).unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].id, "4");
    assert_eq!(page.items[0].title, "מכרז לאספקת ריהוט וציוד למוסדות חינוך");
}

#[rstest]
fn search_matches_title_or_description(engine: QueryEngine) {
    let params = QueryParameters::default().with_search("ריהוט");
    assert_eq!(ids(&engine, &params), vec!["2", "3", "4"]);
}

#[rstest]
fn category_and_status_combine(engine: QueryEngine) {
    let params = QueryParameters::default()
        .with_category("ריהוט")
        .with_status(TenderStatus::Open);
    assert_eq!(ids(&engine, &params), vec!["2", "3"]);
}

#[rstest]
fn unknown_category_is_empty_not_error(engine: QueryEngine) {
    let params = QueryParameters::default().with_category("דלתות");
    let page = engine.query(&params).unwrap();
    assert_eq!(page.total_count, 0);
    assert_eq!(page.page_count, 0);
    assert!(page.items.is_empty());
}

#[rstest]
#[case(PublisherType::Municipal, &["2"])]
#[case(PublisherType::Government, &["1", "3", "4"])]
#[case(PublisherType::PublicCompany, &[])]
fn publisher_filter_uses_keyword_rules(
    engine: QueryEngine,
    #[case] publisher: PublisherType,
    #[case] expected: &[&str],
) {
    let params = QueryParameters::default().with_publisher(publisher);
    assert_eq!(ids(&engine, &params), expected.to_vec());
}

#[rstest]
fn second_page_of_two(engine: QueryEngine) {
    let params = QueryParameters {
        page: 2,
        page_size: 2,
        ..QueryParameters::default()
    };
    let page = engine.query(&params).unwrap();
    assert_eq!(page.page_count, 2);
    assert_eq!(
        page.items.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec!["3", "4"]
    );
}

#[rstest]
fn categories_listing(engine: QueryEngine) {
    assert_eq!(
        engine.store().categories(),
        vec![
            "מכונות דפוס",
            "מכונות עיבוד מתכת",
            "מכונות עיבוד עץ",
            "עבודות עץ כלליות",
            "ריהוט",
        ]
    );
}

#[rstest]
fn get_by_id(engine: QueryEngine) {
    let record = engine.store().get("1").unwrap();
    assert_eq!(record.contact.phone, "08-9776823");
    assert!(matches!(
        engine.store().get("99"),
        Err(CatalogError::NotFound { .. })
    ));
}

#[rstest]
fn ui_labels_parse_into_filters(engine: QueryEngine) {
    let params = QueryParameters {
        category: parse_category_filter("כל הקטגוריות"),
        publisher: parse_publisher_filter("רשויות מקומיות").unwrap(),
        status: parse_status_filter("פתוח להגשה").unwrap(),
        ..QueryParameters::default()
    };
    assert_eq!(ids(&engine, &params), vec!["2"]);
}

#[test]
fn loads_snapshot_copied_to_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all_tenders.json");
    std::fs::copy(fixture_path(), &path).unwrap();
    let store = load_snapshot(&path, &options()).unwrap();
    assert_eq!(store.len(), 4);
}

#[test]
fn malformed_snapshot_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{").unwrap();
    let err = load_snapshot(&path, &options()).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}
