//! Core analysis engine.
//!
//! - `document`: translation file loading, key enumeration and pruning
//! - `keys`: key variations, namespaces and index detection
//! - `patterns`: escaping and search regex construction
//! - `corpus`: source files loaded once into memory
//! - `matchers`: textual, namespace-scoped and dynamic-index searches
//! - `usage`: the per-key decision and parallel classification

pub mod corpus;
pub mod document;
mod error;
pub mod keys;
pub mod matchers;
pub mod patterns;
pub mod usage;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use corpus::{ScanOptions, SourceCorpus, SourceFile};
pub use document::{TranslationDocument, backup_file};
pub use error::ScanError;
pub use matchers::{MatchOptions, SearchOutcome};
pub use usage::{DetectorOptions, Evidence, Strategy, UsageDetector, Verdict};

use crate::config::Config;
use patterns::DEFAULT_SIZE_LIMIT;

/// Result of classifying every key of one translation file.
#[derive(Debug)]
pub struct Analysis {
    pub messages_path: PathBuf,
    pub document: TranslationDocument,
    /// One verdict per leaf key, in document order.
    pub verdicts: Vec<Verdict>,
    pub source_files: usize,
    /// Problems met while loading the source tree.
    pub warnings: Vec<ScanError>,
}

impl Analysis {
    pub fn unused_keys(&self) -> Vec<String> {
        self.verdicts
            .iter()
            .filter(|v| !v.is_used())
            .map(|v| v.key.clone())
            .collect()
    }

    pub fn total_keys(&self) -> usize {
        self.verdicts.len()
    }

    /// Corpus warnings followed by every failed search, deduplicated.
    pub fn all_warnings(&self) -> Vec<ScanError> {
        let mut warnings = self.warnings.clone();
        for failure in self.verdicts.iter().flat_map(|v| &v.failures) {
            if !warnings.contains(failure) {
                warnings.push(failure.clone());
            }
        }
        warnings
    }
}

impl From<&Config> for DetectorOptions {
    fn from(config: &Config) -> Self {
        Self {
            matching: MatchOptions {
                translation_function: config.translation_function.clone(),
                namespace_functions: config.namespace_functions.clone(),
                size_limit: DEFAULT_SIZE_LIMIT,
            },
            error_namespaces: config.error_namespaces.clone(),
            bare_leaf_fallback: config.bare_leaf_fallback,
        }
    }
}

impl ScanOptions {
    /// Ignore patterns and storage exclusion are resolved against `root`.
    pub fn from_config(config: &Config, root: &Path) -> Result<Self> {
        let options = Self {
            extensions: config.extensions.clone(),
            exclude_dir: config.exclude_dir_name(),
            base_dir: Some(root.to_path_buf()),
            ..Default::default()
        };
        options
            .with_ignores(&config.ignores)
            .context("Invalid glob pattern in 'ignores'")
    }
}

/// Load the translation file and source tree, then classify every key.
///
/// The document is only read here; nothing is mutated until the caller
/// decides what to remove.
pub fn analyze<F>(config: &Config, root: &Path, progress: F) -> Result<Analysis>
where
    F: Fn(usize, usize) + Sync,
{
    let messages_path = config.messages_path(root);
    let document = TranslationDocument::load(&messages_path)?;
    let keys = document.keys();

    let scan_options = ScanOptions::from_config(config, root)?;
    let corpus = SourceCorpus::load(&config.source_dirs(root), &scan_options);

    let detector = UsageDetector::new(&corpus, DetectorOptions::from(config));
    let verdicts = detector.classify(&keys, progress);

    Ok(Analysis {
        messages_path,
        document,
        verdicts,
        source_files: corpus.len(),
        warnings: corpus.warnings().to_vec(),
    })
}
