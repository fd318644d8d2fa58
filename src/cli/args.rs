//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report translation keys with no usage in the source tree
//! - `clean`: Remove unused keys from the translation file
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `check` and `clean`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Translation JSON file (overrides config file)
    #[arg(long)]
    pub messages_file: Option<PathBuf>,

    /// Source directory to scan; repeat for several (overrides config file)
    #[arg(long = "source-root")]
    pub source_roots: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Skip writing a backup of the translation file
    #[arg(long)]
    pub no_backup: bool,

    /// Only show the keys that would be deleted
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation keys that are never used in source code
    Check(CheckCommand),
    /// Remove unused translation keys from the JSON file
    Clean(CleanCommand),
    /// Initialize a new .i18nsweeprc.json configuration file
    Init,
}
