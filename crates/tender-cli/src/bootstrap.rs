use anyhow::Context;
use tender_config::TenderConfig;

/// Load configuration after pulling a `.env` from the working directory, if any.
pub fn load_config() -> anyhow::Result<TenderConfig> {
    TenderConfig::load_with_dotenv().context("failed to load tenders configuration")
}
