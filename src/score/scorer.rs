//! Weight-decayed position scoring.
//!
//! For every document, the accepted phrases are walked in the order the
//! selector produced them. The first time a phrase is found in the
//! document (case-insensitive substring match against the cleaned
//! text), it takes the next unused sequential position `p` and earns
//! `max(1, weight) / p^alpha`. A phrase is never counted twice within
//! the same document; a phrase absent from a document earns nothing
//! from it.

use crate::select::threshold::SelectedPhrase;
use crate::types::Document;

/// A phrase with its aggregates, still in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPhrase {
    /// Case-insensitive identity key.
    pub key: String,
    /// Best-cased surface form.
    pub text: String,
    /// Sum of per-document contributions.
    pub score: f64,
    /// Sum of clamped weights over matching documents (reporting only).
    pub weight: i64,
}

/// Contribution of one document hit: `max(1, weight) / position^alpha`.
/// Position 0 means "not found" and contributes nothing.
pub fn contribution(weight: i64, position: usize, alpha: f64) -> f64 {
    if position == 0 {
        return 0.0;
    }
    weight.max(1) as f64 / (position as f64).powf(alpha)
}

/// Computes aggregate scores and weights for the selected phrase set.
#[derive(Debug, Clone)]
pub struct RelevancePositionScorer {
    alpha: f64,
}

impl RelevancePositionScorer {
    /// Create a scorer with the given decay exponent.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Score every phrase across the cleaned document batch.
    pub fn score(&self, phrases: &[SelectedPhrase], documents: &[Document]) -> Vec<ScoredPhrase> {
        let mut scored: Vec<ScoredPhrase> = phrases
            .iter()
            .map(|p| ScoredPhrase {
                key: p.key.clone(),
                text: p.text.clone(),
                score: 0.0,
                weight: 0,
            })
            .collect();

        for doc in documents {
            let text_lower = doc.text.to_lowercase();
            let mut position = 0usize;
            for phrase in scored.iter_mut() {
                if position >= phrases.len() {
                    break;
                }
                if text_lower.contains(&phrase.key) {
                    position += 1;
                    phrase.score += contribution(doc.weight, position, self.alpha);
                    phrase.weight += doc.weight.max(1);
                }
            }
        }

        scored
    }
}
