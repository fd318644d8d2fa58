//! `clean`: detect unused keys, confirm, back up, then rewrite the file.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::Result;

use super::super::args::CleanCommand;
use super::helper::{CommandContext, print_progress};
use super::{CleanOutcome, CleanSummary, CommandResult, CommandSummary, SweepReport};
use crate::{
    config::Config,
    core::{Analysis, backup_file},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Skip confirmation.
    pub yes: bool,
    pub no_backup: bool,
    pub dry_run: bool,
}

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let options = CleanOptions {
        yes: cmd.yes,
        no_backup: cmd.no_backup,
        dry_run: cmd.dry_run,
    };

    let analysis = crate::core::analyze(&ctx.config, &ctx.root, print_progress)?;
    let mut stdin = io::stdin().lock();
    let summary = apply_clean(analysis, &ctx.config, &ctx.root, options, |keys| {
        prompt_delete(keys, &mut stdin, &mut io::stdout())
    })?;

    Ok(CommandResult {
        summary: CommandSummary::Clean(summary),
    })
}

/// Act on a finished analysis.
///
/// `confirm` is asked only when there is something to delete and neither
/// `yes` nor `dry_run` is set.
pub fn apply_clean<F>(
    analysis: Analysis,
    config: &Config,
    root: &Path,
    options: CleanOptions,
    mut confirm: F,
) -> Result<CleanSummary>
where
    F: FnMut(&[String]) -> Result<bool>,
{
    let report = SweepReport::from_analysis(&analysis);
    let unused = analysis.unused_keys();

    let outcome = if unused.is_empty() {
        CleanOutcome::NothingToClean
    } else if options.dry_run {
        CleanOutcome::DryRun
    } else if !options.yes && !confirm(unused.as_slice())? {
        CleanOutcome::Declined
    } else {
        let backup = if options.no_backup {
            None
        } else {
            let backup_path = config.backup_path(root);
            match backup_file(&analysis.messages_path, &backup_path) {
                Ok(()) => Some(backup_path),
                Err(err) => {
                    return Ok(CleanSummary {
                        report,
                        outcome: CleanOutcome::BackupFailed(format!("{:#}", err)),
                    });
                }
            }
        };

        let mut document = analysis.document;
        let deleted = document.remove_keys(&unused);
        document.save(&analysis.messages_path)?;
        CleanOutcome::Applied { deleted, backup }
    };

    Ok(CleanSummary { report, outcome })
}

/// List the keys, then ask `y/n` until a valid answer is given.
/// End of input counts as no.
pub fn prompt_delete<R: BufRead, W: Write>(
    keys: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    writeln!(output, "\nUnused keys:")?;
    for key in keys {
        writeln!(output, "  {}", key)?;
    }
    loop {
        write!(
            output,
            "\nDelete these {} unused key(s) from the translation file? (y/n): ",
            keys.len()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer y or n")?,
        }
    }
}
