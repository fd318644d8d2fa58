use anyhow::Result;

use super::super::args::CheckCommand;
use super::helper::{CommandContext, print_progress};
use super::{CommandResult, CommandSummary, SweepReport};
use crate::core::analyze;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let analysis = analyze(&ctx.config, &ctx.root, print_progress)?;

    Ok(CommandResult {
        summary: CommandSummary::Check(SweepReport::from_analysis(&analysis)),
    })
}
