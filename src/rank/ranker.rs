//! Score-ordered ranking with containment dedup and backfill.
//!
//! The primary pass keeps the strongest phrase of every containment
//! family; the backfill pass relaxes only the containment exclusion so
//! a short list still reaches `top_n` when enough material exists.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::nlp::stopwords::Lexicon;
use crate::score::scorer::ScoredPhrase;
use crate::types::RankedPhrase;

/// Produces the final ranked list from scored phrases.
#[derive(Debug, Clone)]
pub struct PhraseRanker {
    top_n: usize,
    lexicon: Arc<Lexicon>,
}

impl PhraseRanker {
    /// Create a ranker returning at most `top_n` phrases.
    pub fn new(top_n: usize, lexicon: Arc<Lexicon>) -> Self {
        Self { top_n, lexicon }
    }

    /// Rank scored phrases.
    ///
    /// Sorts by score descending (stable, so ties keep selection
    /// order), then accepts phrases that do not end in a trailing
    /// connective, are not duplicates, and are not in a substring or
    /// superstring relation with an already-accepted phrase. A second
    /// pass over the remainder relaxes the containment exclusion until
    /// `top_n` is reached or the list is exhausted.
    pub fn rank(&self, mut scored: Vec<ScoredPhrase>) -> Vec<RankedPhrase> {
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut accepted: Vec<usize> = Vec::new();
        let mut accepted_keys: FxHashSet<String> = FxHashSet::default();

        // Primary pass: full exclusions.
        for (i, phrase) in scored.iter().enumerate() {
            if accepted.len() >= self.top_n {
                break;
            }
            if self.lexicon.ends_in_connective(&phrase.key) {
                continue;
            }
            if accepted_keys.contains(&phrase.key) {
                continue;
            }
            let contained = accepted.iter().any(|&j| {
                scored[j].key.contains(&phrase.key) || phrase.key.contains(&scored[j].key)
            });
            if contained {
                continue;
            }
            accepted_keys.insert(phrase.key.clone());
            accepted.push(i);
        }

        // Backfill pass: containment relaxed, duplicates and trailing
        // connectives still excluded.
        if accepted.len() < self.top_n {
            for (i, phrase) in scored.iter().enumerate() {
                if accepted.len() >= self.top_n {
                    break;
                }
                if accepted.contains(&i) {
                    continue;
                }
                if self.lexicon.ends_in_connective(&phrase.key) {
                    continue;
                }
                if accepted_keys.contains(&phrase.key) {
                    continue;
                }
                accepted_keys.insert(phrase.key.clone());
                accepted.push(i);
            }
        }

        accepted
            .into_iter()
            .map(|i| RankedPhrase {
                phrase: scored[i].text.clone(),
                score: scored[i].score,
                weight: scored[i].weight,
            })
            .collect()
    }
}
