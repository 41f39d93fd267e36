use schemars::schema_for;
use tender_core::entities::TenderRecord;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `tenders schema`. Tables make no sense for a schema, so they fall back to JSON.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema_for!(TenderRecord), format)
}
