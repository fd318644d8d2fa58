//! Dispatches to the command handler for the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command's summary
//! - `Err` if the command fails (e.g., config invalid, translation file unreadable)

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, clean::clean, init::init},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
