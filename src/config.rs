use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nsweeprc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_file")]
    pub messages_file: String,
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Directory name whose files never count as usage evidence.
    /// Defaults to the directory holding `messages_file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_dir: Option<String>,
    #[serde(default = "default_translation_function")]
    pub translation_function: String,
    #[serde(default = "default_namespace_functions")]
    pub namespace_functions: Vec<String>,
    #[serde(default = "default_error_namespaces")]
    pub error_namespaces: Vec<String>,
    #[serde(default = "default_bare_leaf_fallback")]
    pub bare_leaf_fallback: bool,
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,
}

fn default_messages_file() -> String {
    "src/locales/zh.json".to_string()
}

fn default_source_roots() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"].map(String::from).to_vec()
}

fn default_translation_function() -> String {
    "t".to_string()
}

fn default_namespace_functions() -> Vec<String> {
    vec!["useTranslations".to_string()]
}

fn default_error_namespaces() -> Vec<String> {
    vec!["errors".to_string()]
}

fn default_bare_leaf_fallback() -> bool {
    true
}

fn default_backup_suffix() -> String {
    ".bak".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_file: default_messages_file(),
            source_roots: default_source_roots(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            exclude_dir: None,
            translation_function: default_translation_function(),
            namespace_functions: default_namespace_functions(),
            error_namespaces: default_error_namespaces(),
            bare_leaf_fallback: default_bare_leaf_fallback(),
            backup_suffix: default_backup_suffix(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob in `ignores` is invalid or a required list is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if self.source_roots.is_empty() {
            bail!("'sourceRoots' must list at least one directory");
        }
        if self.translation_function.trim().is_empty() {
            bail!("'translationFunction' must not be empty");
        }
        if self.backup_suffix.is_empty() {
            bail!("'backupSuffix' must not be empty");
        }

        Ok(())
    }

    pub fn messages_path(&self, root: &Path) -> PathBuf {
        root.join(&self.messages_file)
    }

    pub fn source_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.source_roots.iter().map(|dir| root.join(dir)).collect()
    }

    pub fn backup_path(&self, root: &Path) -> PathBuf {
        let mut path = self.messages_path(root).into_os_string();
        path.push(&self.backup_suffix);
        PathBuf::from(path)
    }

    /// Name of the translation storage directory, e.g. `locales` for
    /// `src/locales/zh.json`.
    pub fn exclude_dir_name(&self) -> Option<String> {
        if let Some(dir) = &self.exclude_dir {
            return (!dir.is_empty()).then(|| dir.clone());
        }
        Path::new(&self.messages_file)
            .parent()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the configured paths are relative to.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
