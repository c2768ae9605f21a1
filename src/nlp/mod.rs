//! Text normalization and lexical resources
//!
//! This module provides text cleaning, memoized tokenization, and the
//! stopword/connective sets consulted by the candidate filter.

pub mod cache;
pub mod normalizer;
pub mod stopwords;
