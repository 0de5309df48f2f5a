//! Data structures for Lanai.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Strict tree ownership, no shared or weak references
//! - Deterministic iteration order

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};
