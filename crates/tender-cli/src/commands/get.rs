use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tenders get <id>`.
pub fn handle(args: &GetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.engine.store().get(args.id.trim())?;
    output(record, flags.format)
}
