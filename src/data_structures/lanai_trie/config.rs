// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai Trie.

use serde::{Deserialize, Serialize};

/// Configuration for the Lanai Trie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanaiTrieConfig {
    /// Optional cap on the number of units accepted by `insert`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_word_length: Option<usize>,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_word_length: none, words of any length are accepted
    pub fn new() -> Self {
        Self {
            max_word_length: None,
        }
    }

    /// Reject words with more than `max_word_length` units.
    ///
    /// # Panics
    ///
    /// Panics if `max_word_length` is zero.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        if max_word_length == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        self.max_word_length = Some(max_word_length);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LanaiTrieConfig::default();
        assert_eq!(config.max_word_length, None);
        assert_eq!(config, LanaiTrieConfig::new());
    }

    #[test]
    fn test_config_builder() {
        let config = LanaiTrieConfig::new().with_max_word_length(12);
        assert_eq!(config.max_word_length, Some(12));
    }

    #[test]
    #[should_panic(expected = "Maximum word length must be greater than 0")]
    fn test_invalid_max_word_length() {
        let _config = LanaiTrieConfig::new().with_max_word_length(0);
    }
}
