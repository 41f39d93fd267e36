use tender_catalog::QueryParameters;
use tender_catalog::query::{parse_category_filter, parse_publisher_filter, parse_status_filter};
use tender_config::QueryConfig;

use crate::cli::root_commands::QueryArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_rows};

/// Handle `tenders query`.
pub fn handle(args: &QueryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = build_parameters(args, &ctx.config.query)?;
    let page = ctx.engine.query(&params)?;

    if flags.format != OutputFormat::Table {
        return output(&page, flags.format);
    }

    let rows = page
        .items
        .iter()
        .map(|record| {
            vec![
                record.id.clone(),
                record.status.as_str().to_string(),
                record.submission_deadline.format("%d/%m/%Y").to_string(),
                record.publisher.clone(),
                record.title.clone(),
            ]
        })
        .collect::<Vec<_>>();
    let footer = format!(
        "page {} of {} ({} matching)",
        page.page,
        page.page_count.max(1),
        page.total_count
    );
    output_rows(
        &["id", "status", "deadline", "publisher", "title"],
        &rows,
        Some(&footer),
    );
    Ok(())
}

/// Translate CLI flags into engine parameters.
///
/// Filter text goes through the same label parsing the listing page uses, so
/// `all` and the Hebrew "all" labels leave a dimension unfiltered.
fn build_parameters(args: &QueryArgs, config: &QueryConfig) -> anyhow::Result<QueryParameters> {
    Ok(QueryParameters {
        category: args.category.as_deref().and_then(parse_category_filter),
        publisher: args
            .publisher
            .as_deref()
            .map(parse_publisher_filter)
            .transpose()?
            .flatten(),
        status: args
            .status
            .as_deref()
            .map(parse_status_filter)
            .transpose()?
            .flatten(),
        search_text: args.search.clone(),
        page: args.page,
        page_size: config.effective_page_size(args.page_size),
    })
}
