//! Adaptive threshold selection
//!
//! This module lowers an occurrence threshold level by level, merging
//! candidates into the accepted set with containment resolution.

pub mod threshold;

pub use threshold::{
    fallback_words, initial_threshold, AdaptiveThresholdSelector, SelectedPhrase, SelectorState,
};
