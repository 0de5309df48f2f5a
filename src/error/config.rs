//! Errors raised while assembling a [`LanaiConfig`](crate::config::LanaiConfig).
//!
//! `ConfigLoader` layers the built-in defaults, an optional TOML, JSON or YAML
//! file and `LANAI__*` environment variables, then runs `Validate` on the
//! result. Each stage maps its failure onto one variant below.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading or validating the Lanai settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The path given with `--config` does not exist.
    #[error("Config file {0:?} does not exist")]
    FileNotFound(PathBuf),

    /// The file has an unsupported extension, is malformed, or a merged value
    /// (file or environment) does not fit the settings type.
    #[error("Could not read settings: {0}")]
    ParseError(String),

    /// A setting parsed but is out of range, such as a zero word-length cap
    /// or an unknown log level.
    #[error("Invalid setting: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let missing = ConfigError::FileNotFound(PathBuf::from("lanai.toml"));
        assert_eq!(missing.to_string(), "Config file \"lanai.toml\" does not exist");

        let parse = ConfigError::ParseError("unsupported extension ini".to_string());
        assert_eq!(parse.to_string(), "Could not read settings: unsupported extension ini");

        let invalid = ConfigError::ValidationError("max_word_length must be greater than 0".to_string());
        assert_eq!(
            invalid.to_string(),
            "Invalid setting: max_word_length must be greater than 0"
        );
    }
}
