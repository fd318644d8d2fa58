//! Report formatting and printing.
//!
//! Findings go to stdout; warnings and failures go to stderr. Separate from
//! the core so the analysis can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CleanOutcome, CleanSummary, CommandResult, CommandSummary, InitSummary, SweepReport,
};
use crate::core::ScanError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match &result.summary {
        CommandSummary::Check(report) => {
            print_findings_to(report, verbose, &mut out);
            print_warnings_to(&report.warnings, verbose, &mut err);
        }
        CommandSummary::Clean(summary) => {
            print_clean_to(summary, verbose, &mut out, &mut err);
            print_warnings_to(&summary.report.warnings, verbose, &mut err);
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut out, &mut err),
    }
}

/// Print the scan totals, then every unused key.
pub fn print_findings_to<W: Write>(report: &SweepReport, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Checked {} translation {} against {} source {}",
        report.total_keys(),
        plural(report.total_keys(), "key", "keys"),
        report.source_files,
        plural(report.source_files, "file", "files"),
    );

    if verbose {
        print_evidence_to(report, writer);
    }

    let unused_count = report.unused_count();
    if unused_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused translation keys found".green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} {} unused {} in {}:",
        FAILURE_MARK.red(),
        unused_count,
        plural(unused_count, "key", "keys"),
        report.messages_path.display()
    );
    for verdict in report.unused() {
        let _ = writeln!(writer, "  {}", verdict.key);
    }
}

/// Which strategy kept each used key, for `-v`.
fn print_evidence_to<W: Write>(report: &SweepReport, writer: &mut W) {
    for verdict in &report.verdicts {
        if let Some(evidence) = &verdict.evidence {
            let _ = writeln!(
                writer,
                "  {} {} {} {}",
                "used:".dimmed(),
                verdict.key,
                format!("({})", evidence.strategy).dimmed().cyan(),
                evidence.file.display().to_string().dimmed()
            );
        }
    }
}

pub fn print_clean_to<W: Write, E: Write>(
    summary: &CleanSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    print_findings_to(&summary.report, verbose, out);

    match &summary.outcome {
        CleanOutcome::NothingToClean => {}
        CleanOutcome::DryRun => {
            let _ = writeln!(out, "\n{} no keys were deleted", "Dry run:".bold().yellow());
        }
        CleanOutcome::Declined => {
            let _ = writeln!(out, "\nNo changes made");
        }
        CleanOutcome::BackupFailed(reason) => {
            let _ = writeln!(err, "{} {}", "error:".bold().red(), reason);
            let _ = writeln!(
                err,
                "Backup failed, the translation file was not modified (use {} to skip the backup)",
                "--no-backup".cyan()
            );
        }
        CleanOutcome::Applied { deleted, backup } => {
            if let Some(backup) = backup {
                let _ = writeln!(out, "\nBackup written to {}", backup.display());
            }
            let _ = writeln!(
                out,
                "{} {} {} {} from {}",
                SUCCESS_MARK.green(),
                "Deleted".green().bold(),
                deleted.len(),
                plural(deleted.len(), "key", "keys"),
                summary.report.messages_path.display()
            );
        }
    }
}

/// Print scan warnings to a custom writer.
///
/// Without `verbose` only the count is shown.
pub fn print_warnings_to<W: Write>(warnings: &[ScanError], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} search problem(s) were treated as no match (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

fn print_init_to<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
