//! Trie configuration validation.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::LanaiTrieConfig;
use crate::error::config::ConfigError;

impl Validate for LanaiTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
