//! Error types.
//!
//! Configuration problems are the only failure mode the crate surfaces:
//! every core pipeline function is total over arbitrary text input. An
//! empty document batch yields an empty outcome, not an error.

use thiserror::Error;

/// Invalid configuration, rejected before pipeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `top_n` must be at least 1.
    #[error("top_n must be >= 1, got {got}")]
    TopNOutOfRange { got: usize },

    /// `ngram_limit` must be at least 1.
    #[error("ngram_limit must be >= 1, got {got}")]
    NgramLimitOutOfRange { got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::TopNOutOfRange { got: 0 };
        assert_eq!(err.to_string(), "top_n must be >= 1, got 0");

        let err = ConfigError::NgramLimitOutOfRange { got: 0 };
        assert_eq!(err.to_string(), "ngram_limit must be >= 1, got 0");
    }
}
