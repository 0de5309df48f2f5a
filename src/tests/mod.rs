//! Test modules for Lanai.
//!
//! This module contains cross-module testing infrastructure:
//! - Configuration loading and validation tests
//! - Error type and reporting tests
//! - Shared fixtures and proptest strategies
//!
//! Trie tests live next to the trie in `data_structures::lanai_trie::tests`.


pub use test_utils::TestFixture;
