//! Environment variables take precedence over TOML files.

use figment::Jail;
use tender_config::TenderConfig;

#[test]
fn env_sets_snapshot_path() {
    Jail::expect_with(|jail| {
        jail.set_env("TENDERS_CATALOG__SNAPSHOT_PATH", "/srv/tenders.json");
        let config = TenderConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.catalog.snapshot_path, "/srv/tenders.json");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tenders")?;
        jail.create_file(
            ".tenders/config.toml",
            r"
[query]
default_page_size = 5
",
        )?;
        jail.set_env("TENDERS_QUERY__DEFAULT_PAGE_SIZE", "12");

        let config = TenderConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.query.default_page_size, 12);
        Ok(())
    });
}

#[test]
fn env_can_disable_classifier() {
    Jail::expect_with(|jail| {
        jail.set_env("TENDERS_PUBLISHERS__ENABLED", "false");
        let config = TenderConfig::load().map_err(|e| e.to_string())?;
        assert!(!config.publishers.enabled);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("TENDERS_CATALOG__CLOSING_SOON_DAYS", "soon");
        assert!(TenderConfig::load().is_err());
        Ok(())
    });
}
