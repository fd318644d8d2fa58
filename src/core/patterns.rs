//! Construction of the regular expressions used by the matchers.
//!
//! Every user-supplied fragment (key, namespace, function name) is escaped
//! before it is spliced into a pattern.

use regex::{Regex, RegexBuilder};

use super::{ScanError, keys::is_index_segment};

/// Compiled size limit applied to every search regex (regex crate default).
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Line substrings accepted as evidence that an array is iterated.
pub const ITERATION_MARKERS: &[&str] = &["map(", "forEach(", "for ("];

pub fn escape(text: &str) -> String {
    regex::escape(text)
}

/// The ways a string constant is referenced in source: quoted literals and
/// the translation-call forms.
pub fn reference_patterns(needle: &str, translate_fn: &str) -> Vec<String> {
    let key = escape(needle);
    let mut patterns = vec![
        format!("\"{}\"", key),
        format!("'{}'", key),
        format!("`{}`", key),
    ];
    patterns.extend(call_patterns(needle, translate_fn));
    patterns
}

/// Translation-call forms only: `t('k')`, `` t(`k`) ``, `{t('k')}` and `={t('k')}`.
pub fn call_patterns(needle: &str, translate_fn: &str) -> Vec<String> {
    let key = escape(needle);
    let call = escape(translate_fn);
    vec![
        format!(r#"{call}\(["']{key}["']\)"#),
        format!(r"{call}\(`{key}`\)"),
        format!(r#"\{{{call}\(["']{key}["']\)\}}"#),
        format!(r#"=\{{{call}\(["']{key}["']\)\}}"#),
    ]
}

/// A namespace declaration such as `useTranslations('home.hero')`.
pub fn namespace_declaration_pattern(namespace: &str, functions: &[String]) -> String {
    let names: Vec<String> = functions.iter().map(|f| escape(f)).collect();
    format!(
        r#"(?:{})\(['"`]{}['"`]\)"#,
        names.join("|"),
        escape(namespace)
    )
}

/// Replace each interior numeric segment with a digit class:
/// `items.0.title` becomes `items\.[0-9]+\.title`.
pub fn generalize_index_key(key: &str) -> String {
    let parts: Vec<&str> = key.split('.').collect();
    let last = parts.len().saturating_sub(1);
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i > 0 && i < last && is_index_segment(part) {
                "[0-9]+".to_string()
            } else {
                escape(part)
            }
        })
        .collect::<Vec<_>>()
        .join(r"\.")
}

/// Compile a single pattern.
pub fn compile(pattern: &str, size_limit: usize) -> Result<Regex, ScanError> {
    RegexBuilder::new(pattern)
        .size_limit(size_limit)
        .build()
        .map_err(|err| ScanError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}

/// Compile a set of alternatives into one regex.
pub fn compile_any(patterns: &[String], size_limit: usize) -> Result<Regex, ScanError> {
    let joined = patterns
        .iter()
        .map(|p| format!("(?:{})", p))
        .collect::<Vec<_>>()
        .join("|");
    compile(&joined, size_limit)
}

pub fn has_iteration_evidence(line: &str) -> bool {
    ITERATION_MARKERS.iter().any(|marker| line.contains(marker))
}
