use std::path::PathBuf;

use crate::core::{Analysis, ScanError, Verdict};

use super::super::exit_status::ExitStatus;

/// Findings shared by `check` and `clean`.
#[derive(Debug)]
pub struct SweepReport {
    pub messages_path: PathBuf,
    pub source_files: usize,
    pub verdicts: Vec<Verdict>,
    pub warnings: Vec<ScanError>,
}

impl SweepReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            messages_path: analysis.messages_path.clone(),
            source_files: analysis.source_files,
            verdicts: analysis.verdicts.clone(),
            warnings: analysis.all_warnings(),
        }
    }

    pub fn total_keys(&self) -> usize {
        self.verdicts.len()
    }

    pub fn unused(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.is_used())
    }

    pub fn unused_count(&self) -> usize {
        self.unused().count()
    }
}

/// What `clean` did after detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Every key is used.
    NothingToClean,
    /// Detection only; the file was not touched.
    DryRun,
    /// The user answered no.
    Declined,
    /// The backup could not be written, so the file was left untouched.
    BackupFailed(String),
    Applied {
        deleted: Vec<String>,
        backup: Option<PathBuf>,
    },
}

#[derive(Debug)]
pub struct CleanSummary {
    pub report: SweepReport,
    pub outcome: CleanOutcome,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the file was not written.
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(SweepReport),
    Clean(CleanSummary),
    Init(InitSummary),
}

/// Result of running an i18n-sweep command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Check(report) if report.unused_count() > 0 => ExitStatus::Failure,
            CommandSummary::Clean(CleanSummary {
                outcome: CleanOutcome::BackupFailed(_),
                ..
            }) => ExitStatus::Failure,
            CommandSummary::Init(InitSummary { error: Some(_), .. }) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
