//! Candidate filter — an ordered predicate chain.
//!
//! Each gate shares one capability (`test`) and the chain order is part
//! of the contract: the multi-word gate's all-stopword check must run
//! before the casing gate, because connective words are a stopword
//! subset and the casing gate assumes earlier exclusions already
//! happened. This chain is the pipeline's precision/recall control
//! point.

use std::sync::Arc;

use crate::nlp::stopwords::Lexicon;
use crate::types::SalienceConfig;

fn starts_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn starts_with_digit(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// A single named gate in the filter chain. `test` returns `true` when
/// the candidate passes this gate.
pub trait CandidatePredicate: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;
    /// Whether the candidate passes this gate.
    fn test(&self, tokens: &[String]) -> bool;
}

/// Gate 1 — single-token candidates.
///
/// Rejects one-character tokens and sentence starters/pronouns; with
/// the capitalization filter on, additionally requires a leading
/// uppercase letter. Multi-word candidates pass through.
struct UnigramGate {
    lexicon: Arc<Lexicon>,
    require_capitalized: bool,
}

impl CandidatePredicate for UnigramGate {
    fn name(&self) -> &'static str {
        "unigram"
    }

    fn test(&self, tokens: &[String]) -> bool {
        if tokens.len() != 1 {
            return true;
        }
        let word = &tokens[0];
        if word.chars().count() <= 1 {
            return false;
        }
        if self.lexicon.is_sentence_starter(word) {
            return false;
        }
        if self.require_capitalized && !starts_capitalized(word) {
            return false;
        }
        true
    }
}

/// Gate 2 — multi-token candidates.
///
/// Rejects candidates containing a custom-excluded word, starting with
/// a sentence starter or a digit, or consisting entirely of stopwords.
/// Single-word candidates pass through.
struct MultigramGate {
    lexicon: Arc<Lexicon>,
    excluded: rustc_hash::FxHashSet<String>,
}

impl CandidatePredicate for MultigramGate {
    fn name(&self) -> &'static str {
        "multigram"
    }

    fn test(&self, tokens: &[String]) -> bool {
        if tokens.len() < 2 {
            return true;
        }
        if tokens
            .iter()
            .any(|t| self.excluded.contains(&t.to_lowercase()))
        {
            return false;
        }
        if self.lexicon.is_sentence_starter(&tokens[0]) {
            return false;
        }
        if starts_with_digit(&tokens[0]) {
            return false;
        }
        if tokens.iter().all(|t| self.lexicon.is_stopword(t)) {
            return false;
        }
        true
    }
}

/// Gate 3 — boundary casing.
///
/// With the capitalization filter on, requires a capitalized first
/// token and a capitalized (and not literally `I`) or digit-leading
/// last token. With it off, rejects candidates ending in a trailing
/// connective.
struct CasingGate {
    lexicon: Arc<Lexicon>,
    capitalization_filter: bool,
}

impl CandidatePredicate for CasingGate {
    fn name(&self) -> &'static str {
        "casing"
    }

    fn test(&self, tokens: &[String]) -> bool {
        let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
            return false;
        };
        if self.capitalization_filter {
            starts_capitalized(first)
                && ((starts_capitalized(last) && last.as_str() != "I") || starts_with_digit(last))
        } else {
            !self.lexicon.is_trailing_connective(last)
        }
    }
}

/// The ordered predicate chain consulted by the miner before counting.
pub struct CandidateFilter {
    predicates: Vec<Box<dyn CandidatePredicate>>,
}

impl CandidateFilter {
    /// Build the standard three-gate chain from a lexicon and config.
    pub fn new(lexicon: Arc<Lexicon>, config: &SalienceConfig) -> Self {
        let predicates: Vec<Box<dyn CandidatePredicate>> = vec![
            Box::new(UnigramGate {
                lexicon: Arc::clone(&lexicon),
                require_capitalized: config.apply_capitalization_filter,
            }),
            Box::new(MultigramGate {
                lexicon: Arc::clone(&lexicon),
                excluded: config.custom_excluded_words.clone(),
            }),
            Box::new(CasingGate {
                lexicon,
                capitalization_filter: config.apply_capitalization_filter,
            }),
        ];
        Self { predicates }
    }

    /// Whether a candidate passes every gate, in order.
    pub fn accepts(&self, tokens: &[String]) -> bool {
        self.predicates.iter().all(|p| p.test(tokens))
    }

    /// Name of the first gate that rejects the candidate, if any.
    pub fn rejection(&self, tokens: &[String]) -> Option<&'static str> {
        self.predicates
            .iter()
            .find(|p| !p.test(tokens))
            .map(|p| p.name())
    }

    /// Gate names in evaluation order.
    pub fn gate_names(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }
}

impl std::fmt::Debug for CandidateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateFilter")
            .field("gates", &self.gate_names())
            .finish()
    }
}
