use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Filter, search and page through tenders.
    Query(QueryArgs),
    /// Show a single tender.
    Get(GetArgs),
    /// List category tags in the catalog.
    Categories,
    /// Print the JSON Schema of a tender record.
    Schema,
}

/// Arguments for `tenders query`.
#[derive(Clone, Debug, Default, Args)]
pub struct QueryArgs {
    /// Category tag, or "all".
    #[arg(long)]
    pub category: Option<String>,
    /// Publisher type: government, municipal, public-company, private (or Hebrew label).
    #[arg(long)]
    pub publisher: Option<String>,
    /// Status: open, closing-soon, closed (or Hebrew label).
    #[arg(long)]
    pub status: Option<String>,
    /// Free text matched against title and description.
    #[arg(long)]
    pub search: Option<String>,
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Results per page (defaults to `query.default_page_size`).
    #[arg(long)]
    pub page_size: Option<u32>,
}

/// Arguments for `tenders get`.
#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    /// Tender id.
    pub id: String,
}
