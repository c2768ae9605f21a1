//! Candidate generation
//!
//! This module provides n-gram mining with an ordered predicate chain
//! that rejects low-value candidates before they are counted.

pub mod filter;
pub mod miner;

pub use filter::CandidateFilter;
pub use miner::{CandidateMap, CandidateStats, NGramMiner};
