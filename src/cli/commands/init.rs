use std::{env, fs};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    let error = if config_path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        None
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: config_path,
            error,
        }),
    })
}
