//! Threshold-lowering phrase selection with containment resolution.
//!
//! The selector is the only stateful stage: an explicit
//! [`SelectorState`] `{accepted, threshold}` advanced by a pure
//! per-level [`SelectorState::step`]. The threshold starts at
//! `clamp(ceil(doc_count / 40), 2, 30)` and drops by one per level;
//! the loop stops once enough phrases are accepted or the threshold
//! falls below 2.

use rustc_hash::FxHashSet;

use crate::mining::miner::CandidateMap;
use crate::types::Document;

/// Lowest threshold the selector will try.
const THRESHOLD_FLOOR: u64 = 2;
/// Highest starting threshold.
const THRESHOLD_CEIL: u64 = 30;
/// Documents per unit of starting threshold.
const DOCS_PER_THRESHOLD: usize = 40;

/// A candidate promoted into the accepted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPhrase {
    /// Case-insensitive identity key (lowercased surface form).
    pub key: String,
    /// Best-cased surface form.
    pub text: String,
    /// Global occurrence count.
    pub count: u64,
}

/// Starting threshold for a batch of `doc_count` documents.
pub fn initial_threshold(doc_count: usize) -> u64 {
    let scaled = doc_count.div_ceil(DOCS_PER_THRESHOLD) as u64;
    scaled.clamp(THRESHOLD_FLOOR, THRESHOLD_CEIL)
}

/// Selection state: the accepted phrases, in the order they were
/// produced, plus the current occurrence threshold.
#[derive(Debug, Clone)]
pub struct SelectorState {
    /// Accepted phrases in production order.
    pub accepted: Vec<SelectedPhrase>,
    /// Current minimum occurrence count.
    pub threshold: u64,
}

impl SelectorState {
    /// Fresh state for a batch of `doc_count` documents.
    pub fn start(doc_count: usize) -> Self {
        Self {
            accepted: Vec::new(),
            threshold: initial_threshold(doc_count),
        }
    }

    /// Whether the loop should stop.
    pub fn is_done(&self, top_n: usize) -> bool {
        self.accepted.len() >= top_n || self.threshold < THRESHOLD_FLOOR
    }

    /// Run one threshold level and decrement the threshold.
    ///
    /// Multi-word candidates are admitted first; a single-word
    /// candidate only joins the level when it is not a substring of a
    /// multi-word candidate admitted this level or of an accepted
    /// phrase. Admitted candidates merge in (count desc, first_seen
    /// asc) order with containment resolution.
    pub fn step(mut self, candidates: &CandidateMap) -> Self {
        let accepted_keys: FxHashSet<&str> =
            self.accepted.iter().map(|p| p.key.as_str()).collect();

        let mut multi: Vec<(&String, &crate::mining::CandidateStats)> = Vec::new();
        let mut single: Vec<(&String, &crate::mining::CandidateStats)> = Vec::new();
        for (key, stats) in candidates {
            if stats.count < self.threshold || accepted_keys.contains(key.as_str()) {
                continue;
            }
            if key.contains(' ') {
                multi.push((key, stats));
            } else {
                single.push((key, stats));
            }
        }

        let mut level = multi.clone();
        for (key, stats) in single {
            let inside_multi = multi.iter().any(|(m, _)| m.contains(key.as_str()));
            let inside_accepted = self.accepted.iter().any(|p| p.key.contains(key.as_str()));
            if !inside_multi && !inside_accepted {
                level.push((key, stats));
            }
        }

        level.sort_by(|(_, a), (_, b)| {
            b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
        });

        for (key, stats) in level {
            merge(
                &mut self.accepted,
                SelectedPhrase {
                    key: key.clone(),
                    text: stats.exemplar.clone(),
                    count: stats.count,
                },
            );
        }

        self.threshold -= 1;
        self
    }
}

/// Merge one phrase into the accepted set with containment resolution:
/// a new phrase that strictly contains an accepted phrase replaces it
/// in place (further contained entries are dropped); a new phrase
/// contained in an accepted phrase is discarded; anything else is
/// appended.
fn merge(accepted: &mut Vec<SelectedPhrase>, new: SelectedPhrase) {
    let mut replaced = false;
    let mut i = 0;
    while i < accepted.len() {
        if new.key.contains(&accepted[i].key) {
            if replaced {
                accepted.remove(i);
                continue;
            }
            accepted[i] = new.clone();
            replaced = true;
        }
        i += 1;
    }
    if replaced {
        return;
    }
    if accepted.iter().any(|p| p.key.contains(&new.key)) {
        return;
    }
    accepted.push(new);
}

/// Unique cleaned words across all documents, in first-appearance
/// order, truncated to `top_n`. Used when no phrase clears selection.
pub fn fallback_words(documents: &[Document], top_n: usize) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    for doc in documents {
        for word in doc.text.split_whitespace() {
            if words.len() >= top_n {
                return words;
            }
            if seen.insert(word.to_lowercase()) {
                words.push(word.to_string());
            }
        }
    }
    words
}

/// Threshold-lowering selector over a mined candidate map.
#[derive(Debug, Clone)]
pub struct AdaptiveThresholdSelector {
    top_n: usize,
}

impl AdaptiveThresholdSelector {
    /// Create a selector that stops after accepting `top_n` phrases.
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Run the threshold loop to completion, returning the accepted
    /// phrases in production order. An empty result means the caller
    /// should fall back to [`fallback_words`].
    pub fn select(&self, candidates: &CandidateMap, doc_count: usize) -> Vec<SelectedPhrase> {
        let mut state = SelectorState::start(doc_count);
        while !state.is_done(self.top_n) {
            state = state.step(candidates);
        }
        state.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining::CandidateStats;

    fn candidate_map(entries: &[(&str, u64)]) -> CandidateMap {
        let mut map = CandidateMap::default();
        for (i, (key, count)) in entries.iter().enumerate() {
            map.insert(
                key.to_string(),
                CandidateStats {
                    count: *count,
                    exemplar: key.to_string(),
                    first_seen: i as u64,
                },
            );
        }
        map
    }

    #[test]
    fn test_initial_threshold_clamps() {
        assert_eq!(initial_threshold(0), 2);
        assert_eq!(initial_threshold(3), 2);
        assert_eq!(initial_threshold(80), 2);
        assert_eq!(initial_threshold(81), 3);
        assert_eq!(initial_threshold(400), 10);
        assert_eq!(initial_threshold(100_000), 30);
    }

    #[test]
    fn test_step_admits_multi_before_single() {
        let map = candidate_map(&[("barrier reef", 3), ("reef", 5), ("dive", 3)]);
        let state = SelectorState::start(1).step(&map);

        // "reef" is inside "barrier reef" admitted this level; "dive"
        // is not inside anything.
        let keys: Vec<&str> = state.accepted.iter().map(|p| p.key.as_str()).collect();
        assert!(keys.contains(&"barrier reef"));
        assert!(keys.contains(&"dive"));
        assert!(!keys.contains(&"reef"));
    }

    #[test]
    fn test_single_word_blocked_by_previously_accepted() {
        let map_level1 = candidate_map(&[("barrier reef", 3)]);
        let state = SelectorState::start(1).step(&map_level1);

        // Next level offers "reef" alone; it is inside an accepted phrase.
        let mut map_level2 = map_level1.clone();
        map_level2.insert(
            "reef".to_string(),
            CandidateStats {
                count: 2,
                exemplar: "reef".to_string(),
                first_seen: 99,
            },
        );
        let state = state.step(&map_level2);
        let keys: Vec<&str> = state.accepted.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["barrier reef"]);
    }

    #[test]
    fn test_merge_replaces_contained_phrase_in_place() {
        let mut accepted = vec![
            SelectedPhrase {
                key: "barrier reef".into(),
                text: "Barrier Reef".into(),
                count: 3,
            },
            SelectedPhrase {
                key: "dive".into(),
                text: "dive".into(),
                count: 3,
            },
        ];
        merge(
            &mut accepted,
            SelectedPhrase {
                key: "great barrier reef".into(),
                text: "Great Barrier Reef".into(),
                count: 2,
            },
        );

        // Replacement keeps the slot of the phrase it subsumed.
        assert_eq!(accepted[0].key, "great barrier reef");
        assert_eq!(accepted[1].key, "dive");
    }

    #[test]
    fn test_merge_discards_contained_newcomer() {
        let mut accepted = vec![SelectedPhrase {
            key: "great barrier reef".into(),
            text: "Great Barrier Reef".into(),
            count: 2,
        }];
        merge(
            &mut accepted,
            SelectedPhrase {
                key: "barrier reef".into(),
                text: "Barrier Reef".into(),
                count: 3,
            },
        );
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].key, "great barrier reef");
    }

    #[test]
    fn test_merge_collapses_multiple_contained_entries() {
        let mut accepted = vec![
            SelectedPhrase {
                key: "barrier reef".into(),
                text: "Barrier Reef".into(),
                count: 3,
            },
            SelectedPhrase {
                key: "great barrier".into(),
                text: "Great Barrier".into(),
                count: 2,
            },
        ];
        merge(
            &mut accepted,
            SelectedPhrase {
                key: "great barrier reef".into(),
                text: "Great Barrier Reef".into(),
                count: 2,
            },
        );
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].key, "great barrier reef");
    }

    #[test]
    fn test_containment_example_survivor() {
        // "great barrier reef" (count 2) and "barrier reef" (count 3)
        // first qualify at the same level; the longer phrase must
        // replace the shorter one it contains.
        let map = candidate_map(&[("barrier reef", 3), ("great barrier reef", 2)]);
        let selector = AdaptiveThresholdSelector::new(1);
        let accepted = selector.select(&map, 3);

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].key, "great barrier reef");
    }

    #[test]
    fn test_selection_stops_at_top_n() {
        let map = candidate_map(&[("alpha ray", 9), ("beta ray", 8), ("gamma ray", 7)]);
        let selector = AdaptiveThresholdSelector::new(2);
        let accepted = selector.select(&map, 1);
        assert_eq!(accepted.len(), 3); // whole level merges, then stop
    }

    #[test]
    fn test_level_order_count_desc_then_first_seen() {
        let map = candidate_map(&[("beta ray", 2), ("alpha ray", 2), ("delta ray", 5)]);
        let state = SelectorState::start(1).step(&map);

        let keys: Vec<&str> = state.accepted.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["delta ray", "beta ray", "alpha ray"]);
    }

    #[test]
    fn test_empty_candidates_terminate() {
        let selector = AdaptiveThresholdSelector::new(5);
        let accepted = selector.select(&CandidateMap::default(), 1000);
        assert!(accepted.is_empty());
    }

    #[test]
    fn test_fallback_words_first_appearance_order() {
        let docs = vec![
            Document::new("reef dive Reef", 1),
            Document::new("coral reef garden", 1),
        ];
        assert_eq!(
            fallback_words(&docs, 10),
            vec!["reef", "dive", "coral", "garden"]
        );
        assert_eq!(fallback_words(&docs, 2), vec!["reef", "dive"]);
    }
}
