use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use tender_catalog::snapshot::load_snapshot;
use tender_catalog::{KeywordClassifier, QueryEngine, SnapshotOptions};
use tender_config::TenderConfig;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
#[derive(Debug)]
pub struct AppContext {
    pub config: TenderConfig,
    pub engine: QueryEngine,
}

impl AppContext {
    /// Load the snapshot and build the query engine.
    pub fn init(config: TenderConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        Self::init_at(config, flags, Local::now().date_naive())
    }

    fn init_at(config: TenderConfig, flags: &GlobalFlags, today: NaiveDate) -> anyhow::Result<Self> {
        let path = resolve_snapshot_path(flags.catalog.as_deref(), &config)?;
        let options = SnapshotOptions {
            today,
            closing_soon_days: config.catalog.closing_soon_days,
        };
        let store = load_snapshot(&path, &options)
            .with_context(|| format!("failed to load tender snapshot {}", path.display()))?;

        let mut engine = QueryEngine::new(Arc::new(store));
        match KeywordClassifier::from_config(&config.publishers) {
            Some(classifier) => engine = engine.with_classifier(classifier),
            None => tracing::debug!("publisher classification disabled"),
        }

        Ok(Self { config, engine })
    }
}

fn resolve_snapshot_path(
    override_path: Option<&str>,
    config: &TenderConfig,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(PathBuf::from(path));
    }
    config.catalog.snapshot_path().context(
        "no tender snapshot configured; pass --catalog <path> or set TENDERS_CATALOG__SNAPSHOT_PATH",
    )
}

/// Warn about `TENDERS_*` variables that did not land in any config section.
pub fn warn_unconfigured(config: &TenderConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TenderConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();
    if !config.catalog.is_configured() && has_env_prefix(&env_keys, "TENDERS_CATALOG") {
        warnings.push(
            "Catalog config appears default while TENDERS_CATALOG* env vars exist. Use double underscores (example: TENDERS_CATALOG__SNAPSHOT_PATH)."
                .to_string(),
        );
    }
    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
