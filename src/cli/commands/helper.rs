use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};

/// Configuration with command-line overrides applied.
pub struct CommandContext {
    pub config: Config,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let loaded = load_config(&cwd)?;
        if common.verbose {
            if loaded.from_file {
                eprintln!("Using {} in {}", CONFIG_FILE_NAME, loaded.root.display());
            } else {
                eprintln!("No {} found, using defaults", CONFIG_FILE_NAME);
            }
        }
        let mut config = loaded.config;

        // Overrides are relative to the working directory, not the config file.
        if let Some(file) = &common.messages_file {
            config.messages_file = cwd.join(file).to_string_lossy().into_owned();
        }
        if !common.source_roots.is_empty() {
            config.source_roots = common
                .source_roots
                .iter()
                .map(|p| cwd.join(p).to_string_lossy().into_owned())
                .collect();
        }

        Ok(Self {
            config,
            root: loaded.root,
        })
    }
}

/// Progress line every 50 keys and on the last key.
pub const PROGRESS_INTERVAL: usize = 50;

pub fn print_progress(done: usize, total: usize) {
    if done % PROGRESS_INTERVAL == 0 || done == total {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "Progress: {}/{}", done, total);
    }
}
