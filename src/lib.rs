//! Lanai Library
//!
//! This library contains a prefix-tree dictionary with autosuggestion and
//! edit-distance spelling suggestions, together with the configuration and
//! error handling used by the `lanai` command-line tool.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`] holds the trie and its algorithms.
//! - [`config`] loads and validates layered settings.
//! - [`error`] defines the crate-level error type and reporting.

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
