//! Per-key usage decision.
//!
//! Strategies run cheapest and most specific first and stop at the first
//! match:
//!
//! 1. index-generalized search for keys like `items.0.title`
//! 2. full key as a literal or translation call
//! 3. bare last segment inside files that declare the key's namespace
//! 4. every other key variation (`b.c`, `c` for `a.b.c`)
//! 5. the key without a leading error namespace (`errors.x` -> `x`)

use std::{fmt, path::PathBuf, sync::Mutex};

use rayon::prelude::*;

use super::{
    ScanError,
    corpus::SourceCorpus,
    keys::{is_dynamic_index_key, key_variations, namespace_of, strip_error_namespace},
    matchers::{MatchOptions, SearchOutcome, find_index_usage, find_namespaced, find_reference},
};

/// The strategy that found evidence for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    DynamicIndex,
    FullKey,
    Namespace(String),
    Variation(String),
    ErrorFallback(String),
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DynamicIndex => write!(f, "dynamic index"),
            Self::FullKey => write!(f, "full key"),
            Self::Namespace(ns) => write!(f, "namespace `{}`", ns),
            Self::Variation(v) => write!(f, "variation `{}`", v),
            Self::ErrorFallback(v) => write!(f, "error key `{}`", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub strategy: Strategy,
    pub file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub key: String,
    pub evidence: Option<Evidence>,
    /// Searches that could not run while deciding this key.
    pub failures: Vec<ScanError>,
}

impl Verdict {
    pub fn is_used(&self) -> bool {
        self.evidence.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct DetectorOptions {
    pub matching: MatchOptions,
    /// First segments whose keys may be referenced without their prefix.
    pub error_namespaces: Vec<String>,
    /// Whether the bare last segment counts as a variation.
    pub bare_leaf_fallback: bool,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            matching: MatchOptions::default(),
            error_namespaces: vec!["errors".to_string()],
            bare_leaf_fallback: true,
        }
    }
}

pub struct UsageDetector<'a> {
    corpus: &'a SourceCorpus,
    options: DetectorOptions,
}

impl<'a> UsageDetector<'a> {
    pub fn new(corpus: &'a SourceCorpus, options: DetectorOptions) -> Self {
        Self { corpus, options }
    }

    pub fn decide(&self, key: &str) -> Verdict {
        let mut failures = Vec::new();
        let evidence = self.find_evidence(key, &mut failures);
        Verdict {
            key: key.to_string(),
            evidence,
            failures,
        }
    }

    fn find_evidence(&self, key: &str, failures: &mut Vec<ScanError>) -> Option<Evidence> {
        let opts = &self.options.matching;
        let corpus = self.corpus;

        let mut accept = |outcome: SearchOutcome, strategy: Strategy| match outcome {
            SearchOutcome::Found(file) => Some(Evidence { strategy, file }),
            SearchOutcome::NotFound => None,
            SearchOutcome::Failed(err) => {
                failures.push(err);
                None
            }
        };

        if is_dynamic_index_key(key)
            && let Some(found) = accept(find_index_usage(key, corpus, opts), Strategy::DynamicIndex)
        {
            return Some(found);
        }

        if let Some(found) = accept(find_reference(key, corpus, opts), Strategy::FullKey) {
            return Some(found);
        }

        if let Some(namespace) = namespace_of(key).filter(|ns| !ns.is_empty())
            && let Some(found) = accept(
                find_namespaced(key, namespace, corpus, opts),
                Strategy::Namespace(namespace.to_string()),
            )
        {
            return Some(found);
        }

        for variation in key_variations(key).into_iter().skip(1) {
            if !self.options.bare_leaf_fallback && !variation.contains('.') {
                continue;
            }
            let outcome = find_reference(&variation, corpus, opts);
            if let Some(found) = accept(outcome, Strategy::Variation(variation)) {
                return Some(found);
            }
        }

        if let Some(stripped) = strip_error_namespace(key, &self.options.error_namespaces)
            && let Some(found) = accept(
                find_reference(stripped, corpus, opts),
                Strategy::ErrorFallback(stripped.to_string()),
            )
        {
            return Some(found);
        }

        None
    }

    /// Decide every key on the rayon pool, returning verdicts in input order.
    ///
    /// `progress` is called with `(done, total)` after each key; calls are
    /// serialized, so `done` increases by one each time.
    pub fn classify<F>(&self, keys: &[String], progress: F) -> Vec<Verdict>
    where
        F: Fn(usize, usize) + Sync,
    {
        let total = keys.len();
        let done = Mutex::new(0usize);

        keys.par_iter()
            .map(|key| {
                let verdict = self.decide(key);
                if let Ok(mut done) = done.lock() {
                    *done += 1;
                    progress(*done, total);
                }
                verdict
            })
            .collect()
    }
}
