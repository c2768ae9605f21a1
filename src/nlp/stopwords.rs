//! Lexical filter sets
//!
//! Bundles the three word sets the candidate filter consults: the English
//! stopword list from the `stop-words` crate (with custom additions),
//! the sentence-starter/pronoun set, and the trailing-connective set.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Words that commonly open a sentence or stand in for a subject.
/// A candidate starting with one of these carries little topical signal.
const SENTENCE_STARTERS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "so", "because", "however", "if", "in", "on", "at",
    "for", "by", "to", "from", "with", "about", "over", "under", "before", "after", "i", "ive",
    "he", "hes", "she", "shes", "it", "its", "they", "theyve", "we", "weve", "this", "that",
    "these", "those", "then", "now", "here", "there", "what", "when", "where", "why", "how",
    "who", "which",
];

/// Connectives that never end a meaningful phrase.
const TRAILING_CONNECTIVES: &[&str] =
    &["and", "or", "of", "the", "in", "on", "at", "to", "for", "with"];

/// Stopword, sentence-starter, and trailing-connective sets, stored
/// lowercase and matched case-insensitively.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: FxHashSet<String>,
    sentence_starters: FxHashSet<String>,
    trailing_connectives: FxHashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// Build the standard English lexicon.
    pub fn english() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self {
            stopwords,
            sentence_starters: SENTENCE_STARTERS.iter().map(|s| s.to_string()).collect(),
            trailing_connectives: TRAILING_CONNECTIVES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a lexicon with empty sets (no filtering). Useful in tests.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            sentence_starters: FxHashSet::default(),
            trailing_connectives: FxHashSet::default(),
        }
    }

    /// Add additional stopwords.
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Check if a word is a sentence starter or pronoun.
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        self.sentence_starters.contains(&word.to_lowercase())
    }

    /// Check if a word is a trailing connective.
    pub fn is_trailing_connective(&self, word: &str) -> bool {
        self.trailing_connectives.contains(&word.to_lowercase())
    }

    /// Check whether a phrase string ends in a trailing connective
    /// (whole-token match on the last word).
    pub fn ends_in_connective(&self, phrase: &str) -> bool {
        phrase
            .rsplit(' ')
            .next()
            .is_some_and(|last| self.is_trailing_connective(last))
    }

    /// Number of stopwords in the set.
    pub fn num_stopwords(&self) -> usize {
        self.stopwords.len()
    }
}
