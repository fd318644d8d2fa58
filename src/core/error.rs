use thiserror::Error;

/// Non-fatal failures met while scanning sources for key usage.
///
/// A failed search never marks a key as used; it is reported so the caller
/// can tell "nothing matched" apart from "the search could not run".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A search pattern could not be compiled.
    #[error("invalid search pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
    /// A source file could not be read as UTF-8 text.
    #[error("cannot read {path}: {message}")]
    UnreadableFile { path: String, message: String },
    /// A directory entry could not be visited.
    #[error("cannot access path: {0}")]
    Walk(String),
}
