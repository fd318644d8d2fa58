//! i18n-sweep - find and remove unused keys from a JSON translation file
//!
//! The translation file is flattened into dot-separated key paths, and each key
//! is looked up in the source tree with a chain of textual search strategies.
//! Keys no strategy can find are reported, and `clean` deletes them.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and defaults
//! - `core`: Translation document, source corpus, and usage detection

pub mod cli;
pub mod config;
pub mod core;
