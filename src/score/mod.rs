//! Relevance and position scoring
//!
//! This module computes the weight-decayed, position-aware score each
//! phrase accumulates across the document batch.

pub mod scorer;

pub use scorer::{contribution, RelevancePositionScorer, ScoredPhrase};
