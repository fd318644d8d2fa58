//! Usage matchers over the source corpus.
//!
//! Each matcher answers one question about one string and reports a
//! [`SearchOutcome`] instead of a bare bool, so a search that could not run
//! is distinguishable from one that found nothing.

use std::path::PathBuf;

use super::{
    ScanError,
    corpus::{SourceCorpus, SourceFile},
    keys::{first_segment, last_segment},
    patterns::{
        DEFAULT_SIZE_LIMIT, call_patterns, compile, compile_any, generalize_index_key,
        has_iteration_evidence, namespace_declaration_pattern, reference_patterns,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A match was found; carries the first file that matched.
    Found(PathBuf),
    NotFound,
    Failed(ScanError),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Name of the translation lookup function, `t` in `t('key')`.
    pub translation_function: String,
    /// Calls that bind a namespace, e.g. `useTranslations('home')`.
    pub namespace_functions: Vec<String>,
    /// Compiled size limit for every search regex.
    pub size_limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            translation_function: "t".to_string(),
            namespace_functions: vec!["useTranslations".to_string()],
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// Search for `needle` as a quoted literal or translation call in any file
/// outside the translation storage directory.
pub fn find_reference(needle: &str, corpus: &SourceCorpus, opts: &MatchOptions) -> SearchOutcome {
    let patterns = reference_patterns(needle, &opts.translation_function);
    let re = match compile_any(&patterns, opts.size_limit) {
        Ok(re) => re,
        Err(err) => return SearchOutcome::Failed(err),
    };

    first_match(corpus.evidence_files(), |content| re.is_match(content))
}

/// Files that bind `namespace` through one of the namespace functions.
pub fn files_declaring_namespace<'a>(
    namespace: &str,
    corpus: &'a SourceCorpus,
    opts: &MatchOptions,
) -> Result<Vec<&'a SourceFile>, ScanError> {
    if opts.namespace_functions.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = namespace_declaration_pattern(namespace, &opts.namespace_functions);
    let re = compile(&pattern, opts.size_limit)?;

    Ok(corpus
        .files()
        .iter()
        .filter(|file| re.is_match(&file.content))
        .collect())
}

/// Search the given files for the bare last segment of `key` in call form.
pub fn find_in_namespace_files(
    key: &str,
    files: &[&SourceFile],
    opts: &MatchOptions,
) -> SearchOutcome {
    if files.is_empty() {
        return SearchOutcome::NotFound;
    }
    let patterns = call_patterns(last_segment(key), &opts.translation_function);
    let re = match compile_any(&patterns, opts.size_limit) {
        Ok(re) => re,
        Err(err) => return SearchOutcome::Failed(err),
    };

    first_match(files.iter().copied(), |content| re.is_match(content))
}

/// Look for `t('leaf')` inside files that declared the key's namespace.
pub fn find_namespaced(
    key: &str,
    namespace: &str,
    corpus: &SourceCorpus,
    opts: &MatchOptions,
) -> SearchOutcome {
    match files_declaring_namespace(namespace, corpus, opts) {
        Ok(files) => find_in_namespace_files(key, &files, opts),
        Err(err) => SearchOutcome::Failed(err),
    }
}

/// Search for an index-generalized form of `key` (`items.[0-9]+.title`).
///
/// When the generalized regex cannot be built, falls back to
/// [`find_iterated_base`] on the first segment.
pub fn find_index_usage(key: &str, corpus: &SourceCorpus, opts: &MatchOptions) -> SearchOutcome {
    let pattern = generalize_index_key(key);
    match compile(&pattern, opts.size_limit) {
        Ok(re) => first_match(corpus.evidence_files(), |content| re.is_match(content)),
        Err(err) => match find_iterated_base(first_segment(key), corpus) {
            SearchOutcome::NotFound => SearchOutcome::Failed(err),
            outcome => outcome,
        },
    }
}

/// Find a line mentioning `'base'` that also iterates (`map(`, `forEach(`
/// or `for (`).
///
/// A best-effort heuristic with low precision: the iteration on the line is
/// not checked to belong to the mentioned key.
pub fn find_iterated_base(base: &str, corpus: &SourceCorpus) -> SearchOutcome {
    let needle = format!("'{}'", base);
    first_match(corpus.evidence_files(), |content| {
        content
            .lines()
            .any(|line| line.contains(&needle) && has_iteration_evidence(line))
    })
}

fn first_match<'a>(
    files: impl Iterator<Item = &'a SourceFile>,
    mut is_match: impl FnMut(&str) -> bool,
) -> SearchOutcome {
    for file in files {
        if is_match(&file.content) {
            return SearchOutcome::Found(file.path.clone());
        }
    }
    SearchOutcome::NotFound
}
