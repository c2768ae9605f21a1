//! # salience
//!
//! Salient phrase mining for weighted short-text collections (e.g.
//! social-media comments carrying upvote counts).
//!
//! The pipeline is a pure, synchronous, deterministic computation over
//! an in-memory document batch:
//!
//! 1. **Normalize** — strip URLs and non-letter characters, collapse
//!    whitespace; tokenization is memoized in a bounded LRU cache.
//! 2. **Mine** — slide n-gram windows over every document, counting
//!    only candidates that pass an ordered predicate chain.
//! 3. **Select** — lower an occurrence threshold level by level,
//!    merging candidates with containment resolution until enough
//!    phrases are accepted (with a raw-word fallback).
//! 4. **Score** — each phrase earns `max(1, weight) / p^alpha` per
//!    document, where `p` is its sequential position of first
//!    appearance.
//! 5. **Rank** — stable sort by score, containment dedup, relaxed
//!    backfill, truncation to `top_n`.
//!
//! Document retrieval, transport, and configuration loading are the
//! caller's concern; the crate performs no I/O.
//!
//! # Example
//!
//! ```
//! use salience::{extract_top_phrases, Document, SalienceConfig};
//!
//! let documents = vec![
//!     Document::new("Great Barrier Reef is amazing", 5),
//!     Document::new("The Great Barrier Reef trip", 2),
//!     Document::new("Barrier Reef dive", 1),
//! ];
//! let config = SalienceConfig::new().with_ngram_limit(3).with_top_n(1);
//!
//! let outcome = extract_top_phrases(documents, &config).unwrap();
//! assert_eq!(outcome.phrases[0].phrase, "Great Barrier Reef");
//! ```

pub mod error;
pub mod mining;
pub mod nlp;
pub mod pipeline;
pub mod rank;
pub mod score;
pub mod select;
pub mod types;

pub use error::ConfigError;
pub use mining::{CandidateFilter, CandidateMap, CandidateStats, NGramMiner};
pub use nlp::normalizer::TextNormalizer;
pub use nlp::stopwords::Lexicon;
pub use pipeline::{extract_top_phrases, NoopObserver, Pipeline, PipelineObserver};
pub use rank::PhraseRanker;
pub use score::{RelevancePositionScorer, ScoredPhrase};
pub use select::{AdaptiveThresholdSelector, SelectedPhrase};
pub use types::{Document, MiningOutcome, RankedPhrase, SalienceConfig};
