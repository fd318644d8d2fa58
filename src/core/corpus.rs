//! In-memory source corpus.
//!
//! Every scannable file under the source roots is read once; all matchers
//! then run against the loaded text instead of re-walking the tree per
//! pattern.

use std::{
    collections::BTreeMap,
    fs,
    path::{Component, Path, PathBuf},
};

use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::ScanError;

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
    /// True when the file lives inside the translation storage directory.
    /// Matches in such files are not usage evidence.
    pub excluded: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, excluded: bool) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            excluded,
        }
    }
}

/// Options controlling which files are loaded.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub extensions: Vec<String>,
    /// Wildcard patterns, matched against the path relative to `base_dir`.
    pub ignore_globs: Vec<Pattern>,
    /// Patterns without wildcards: path prefixes relative to `base_dir`.
    pub ignore_paths: Vec<PathBuf>,
    pub exclude_dir: Option<String>,
    /// Project root. Paths outside it are taken relative to the source root
    /// they were walked from.
    pub base_dir: Option<PathBuf>,
}

/// Whether an ignore pattern contains glob wildcards (`*` or `?`).
/// Patterns without them are literal paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

impl ScanOptions {
    /// Split `patterns` into globs and literal prefixes.
    pub fn with_ignores(mut self, patterns: &[String]) -> Result<Self, glob::PatternError> {
        for pattern in patterns {
            if is_glob_pattern(pattern) {
                self.ignore_globs.push(Pattern::new(pattern)?);
            } else {
                self.ignore_paths.push(PathBuf::from(pattern));
            }
        }
        Ok(self)
    }

    fn relative<'p>(&self, path: &'p Path, walk_root: &Path) -> &'p Path {
        self.base_dir
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .or_else(|| path.strip_prefix(walk_root).ok())
            .unwrap_or(path)
    }

    fn is_ignored(&self, path: &Path, relative: &Path) -> bool {
        let literal = |prefix: &PathBuf| relative.starts_with(prefix);
        let glob = |p: &Pattern| p.matches_path(relative) || p.matches_path(path);
        self.ignore_paths.iter().any(literal) || self.ignore_globs.iter().any(glob)
    }
}

#[derive(Debug, Default)]
pub struct SourceCorpus {
    files: Vec<SourceFile>,
    warnings: Vec<ScanError>,
}

impl SourceCorpus {
    pub fn from_files(files: Vec<SourceFile>) -> Self {
        Self {
            files,
            warnings: Vec::new(),
        }
    }

    /// Walk each root and read every file with a matching extension.
    ///
    /// Unreadable entries are recorded as warnings and skipped.
    pub fn load(roots: &[PathBuf], options: &ScanOptions) -> Self {
        let mut warnings = Vec::new();
        // Path -> lies inside the storage directory.
        let mut paths: BTreeMap<PathBuf, bool> = BTreeMap::new();

        for root in roots {
            if !root.exists() {
                warnings.push(ScanError::Walk(format!(
                    "source root does not exist: {}",
                    root.display()
                )));
                continue;
            }
            for entry in WalkDir::new(root) {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        warnings.push(ScanError::Walk(e.to_string()));
                        continue;
                    }
                };
                let path = entry.path();
                if !entry.file_type().is_file() || !has_extension(path, &options.extensions) {
                    continue;
                }
                let relative = options.relative(path, root);
                if options.is_ignored(path, relative) {
                    continue;
                }
                let excluded = options
                    .exclude_dir
                    .as_deref()
                    .is_some_and(|dir| in_directory(relative, dir));
                paths.entry(path.to_path_buf()).or_insert(excluded);
            }
        }

        let paths: Vec<(PathBuf, bool)> = paths.into_iter().collect();
        let results: Vec<Result<SourceFile, ScanError>> = paths
            .into_par_iter()
            .map(|(path, excluded)| {
                fs::read_to_string(&path)
                    .map(|content| SourceFile::new(path.clone(), content, excluded))
                    .map_err(|err| ScanError::UnreadableFile {
                        path: path.display().to_string(),
                        message: err.to_string(),
                    })
            })
            .collect();

        let mut files = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(file) => files.push(file),
                Err(err) => warnings.push(err),
            }
        }

        Self { files, warnings }
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Files whose matches count as usage evidence.
    pub fn evidence_files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter().filter(|f| !f.excluded)
    }

    pub fn warnings(&self) -> &[ScanError] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Whether any directory component of the relative `path` is named `dir`.
fn in_directory(path: &Path, dir: &str) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    parent
        .components()
        .any(|c| matches!(c, Component::Normal(name) if name == dir))
}
