//! Key path helpers: variations, namespaces and index detection.

/// Search variations of a key, most specific first.
///
/// For `a.b.c` this is `["a.b.c", "b.c", "c"]`; a single-segment key yields
/// only itself. A generic trailing segment shared by many keys will match
/// wherever any of them is used, which is accepted as a recall trade-off.
pub fn key_variations(key: &str) -> Vec<String> {
    let parts: Vec<&str> = key.split('.').collect();
    let n = parts.len();

    let mut variations = vec![key.to_string()];
    for i in 1..n.saturating_sub(1) {
        variations.push(parts[i..].join("."));
    }
    if n > 1 {
        variations.push(parts[n - 1].to_string());
    }
    variations
}

/// The key path without its last segment, or `None` for a single segment.
pub fn namespace_of(key: &str) -> Option<&str> {
    key.rsplit_once('.').map(|(namespace, _)| namespace)
}

pub fn last_segment(key: &str) -> &str {
    key.rsplit_once('.').map_or(key, |(_, last)| last)
}

pub fn first_segment(key: &str) -> &str {
    key.split_once('.').map_or(key, |(first, _)| first)
}

/// Whether an all-digit segment sits strictly between two other segments,
/// as in `items.0.title`.
pub fn is_dynamic_index_key(key: &str) -> bool {
    let parts: Vec<&str> = key.split('.').collect();
    if parts.len() < 3 {
        return false;
    }
    let interior = &parts[1..parts.len() - 1];
    interior.iter().any(|p| is_index_segment(p))
}

pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Strip a leading error namespace, e.g. `errors.invalidEmail` -> `invalidEmail`.
pub fn strip_error_namespace<'a>(key: &'a str, namespaces: &[String]) -> Option<&'a str> {
    let (first, rest) = key.split_once('.')?;
    namespaces.iter().any(|ns| ns == first).then_some(rest)
}
