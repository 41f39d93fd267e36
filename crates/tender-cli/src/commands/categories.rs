use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

/// Handle `tenders categories`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories = ctx.engine.store().categories();
    if flags.format == OutputFormat::Table {
        let rows = categories
            .into_iter()
            .map(|category| vec![category])
            .collect::<Vec<_>>();
        output_rows(&["category"], &rows, None);
        return Ok(());
    }
    output(&CategoriesResponse { categories }, flags.format)
}
