//! Error types for the Lanai Trie.
//!
//! Expected outcomes such as a missing or duplicate word are reported through
//! return values. The only error is a word rejected by an explicitly
//! configured length cap.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// Error when a word has more units than the configured cap.
    #[error("Word of length {length} exceeds maximum word length of {max_length}")]
    WordTooLong {
        /// Number of units in the rejected word.
        length: usize,
        /// The configured maximum.
        max_length: usize,
    },
}

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LanaiTrieError::WordTooLong {
            length: 300,
            max_length: 256,
        };
        assert_eq!(
            err.to_string(),
            "Word of length 300 exceeds maximum word length of 256"
        );
    }
}
