//! Final ranking
//!
//! This module sorts scored phrases, deduplicates by containment, and
//! backfills when the primary pass falls short.

pub mod ranker;

pub use ranker::PhraseRanker;
