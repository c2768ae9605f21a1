//! Core value types: documents, configuration, and ranked output.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default maximum n-gram length.
pub const DEFAULT_NGRAM_LIMIT: usize = 5;
/// Default number of phrases to return.
pub const DEFAULT_TOP_N: usize = 3;
/// Default position-decay exponent.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// A single input document: raw text plus a relevance weight
/// (e.g. an upvote count). The weight may be negative; it is clamped
/// to a floor of 1 at scoring time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Raw (or cleaned) document text.
    pub text: String,
    /// Relevance weight, any integer.
    pub weight: i64,
}

impl Document {
    /// Create a document from text and weight.
    pub fn new(text: impl Into<String>, weight: i64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Configuration for the phrase-mining pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalienceConfig {
    /// Maximum n-gram length to mine (inclusive, >= 1).
    pub ngram_limit: usize,
    /// Number of phrases to return (>= 1).
    pub top_n: usize,
    /// Words that disqualify any multi-word candidate containing them
    /// (matched case-insensitively).
    pub custom_excluded_words: FxHashSet<String>,
    /// When enabled, candidates must carry capitalized boundary tokens.
    pub apply_capitalization_filter: bool,
    /// Position-decay exponent for scoring.
    pub alpha: f64,
}

impl Default for SalienceConfig {
    fn default() -> Self {
        Self {
            ngram_limit: DEFAULT_NGRAM_LIMIT,
            top_n: DEFAULT_TOP_N,
            custom_excluded_words: FxHashSet::default(),
            apply_capitalization_filter: true,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl SalienceConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum n-gram length.
    pub fn with_ngram_limit(mut self, ngram_limit: usize) -> Self {
        self.ngram_limit = ngram_limit;
        self
    }

    /// Set the number of phrases to return.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the custom excluded words (stored lowercased).
    pub fn with_custom_excluded_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.custom_excluded_words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Enable or disable the capitalization filter.
    pub fn with_capitalization_filter(mut self, enabled: bool) -> Self {
        self.apply_capitalization_filter = enabled;
        self
    }

    /// Set the position-decay exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Reject invalid settings before pipeline entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n < 1 {
            return Err(ConfigError::TopNOutOfRange { got: self.top_n });
        }
        if self.ngram_limit < 1 {
            return Err(ConfigError::NgramLimitOutOfRange {
                got: self.ngram_limit,
            });
        }
        Ok(())
    }
}

/// One entry of the final ranked output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPhrase {
    /// Best-cased surface form of the phrase.
    pub phrase: String,
    /// Aggregate relevance/position score.
    pub score: f64,
    /// Sum of clamped weights over documents containing the phrase
    /// (reporting only, not used for ranking).
    pub weight: i64,
}

/// Final pipeline result: the ranked list plus enough context for a
/// transport layer to annotate partial results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiningOutcome {
    /// Ranked phrases, best first. Never longer than `requested`.
    pub phrases: Vec<RankedPhrase>,
    /// The `top_n` that was asked for.
    pub requested: usize,
    /// True when no phrase cleared selection and the output is the
    /// raw-word fallback (unranked, zero scores).
    pub fallback: bool,
}

impl MiningOutcome {
    /// Whether fewer phrases were produced than requested.
    pub fn is_partial(&self) -> bool {
        self.phrases.len() < self.requested
    }

    /// Advisory message for the transport layer when the result is
    /// partial. `None` when the full count was produced.
    pub fn advisory(&self) -> Option<String> {
        if self.is_partial() {
            Some(format!(
                "found {} of {} requested phrases",
                self.phrases.len(),
                self.requested
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = SalienceConfig::default();
        assert_eq!(cfg.ngram_limit, 5);
        assert_eq!(cfg.top_n, 3);
        assert!(cfg.apply_capitalization_filter);
        assert!((cfg.alpha - 0.1).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let cfg = SalienceConfig::new()
            .with_ngram_limit(3)
            .with_top_n(10)
            .with_custom_excluded_words(["Spam", "noise"])
            .with_capitalization_filter(false)
            .with_alpha(0.5);

        assert_eq!(cfg.ngram_limit, 3);
        assert_eq!(cfg.top_n, 10);
        assert!(cfg.custom_excluded_words.contains("spam"));
        assert!(cfg.custom_excluded_words.contains("noise"));
        assert!(!cfg.apply_capitalization_filter);
        assert!((cfg.alpha - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_rejects_zero_top_n() {
        let cfg = SalienceConfig::new().with_top_n(0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TopNOutOfRange { got: 0 })
        ));
    }

    #[test]
    fn test_config_rejects_zero_ngram_limit() {
        let cfg = SalienceConfig::new().with_ngram_limit(0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NgramLimitOutOfRange { got: 0 })
        ));
    }

    #[test]
    fn test_outcome_advisory() {
        let outcome = MiningOutcome {
            phrases: vec![RankedPhrase {
                phrase: "Great Barrier Reef".to_string(),
                score: 7.5,
                weight: 8,
            }],
            requested: 3,
            fallback: false,
        };
        assert!(outcome.is_partial());
        assert_eq!(
            outcome.advisory().as_deref(),
            Some("found 1 of 3 requested phrases")
        );
    }

    #[test]
    fn test_outcome_complete_has_no_advisory() {
        let outcome = MiningOutcome {
            phrases: vec![RankedPhrase {
                phrase: "x".to_string(),
                score: 1.0,
                weight: 1,
            }],
            requested: 1,
            fallback: false,
        };
        assert!(!outcome.is_partial());
        assert!(outcome.advisory().is_none());
    }

    #[test]
    fn test_ranked_phrase_serializes() {
        let p = RankedPhrase {
            phrase: "Great Barrier Reef".to_string(),
            score: 12.5,
            weight: 8,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["phrase"], "Great Barrier Reef");
        assert_eq!(json["weight"], 8);
    }
}
