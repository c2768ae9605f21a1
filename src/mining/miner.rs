//! N-gram mining with pre-count filtering.
//!
//! Slides a window of every length in `[1, ngram_limit]` over each
//! document's token sequence. Candidates are passed through the
//! [`CandidateFilter`] *before* counting, so rejected n-grams never
//! inflate occurrence counts.

use rustc_hash::FxHashMap;

use crate::mining::filter::CandidateFilter;
use crate::nlp::normalizer::TextNormalizer;
use crate::types::Document;

/// Global statistics for one candidate phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateStats {
    /// Number of occurrences across all documents.
    pub count: u64,
    /// Best-cased surface form seen so far: a rendering with at least
    /// one uppercase letter wins over an all-lowercase one.
    pub exemplar: String,
    /// Sequence number of the candidate's first sighting; later sorts
    /// use it as a deterministic tie-break.
    pub first_seen: u64,
}

/// Case-insensitive phrase key → statistics.
pub type CandidateMap = FxHashMap<String, CandidateStats>;

fn has_uppercase(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
}

/// Generates and counts filtered n-gram candidates.
#[derive(Debug)]
pub struct NGramMiner {
    ngram_limit: usize,
    filter: CandidateFilter,
}

impl NGramMiner {
    /// Create a miner emitting n-grams up to `ngram_limit` tokens.
    pub fn new(ngram_limit: usize, filter: CandidateFilter) -> Self {
        Self {
            ngram_limit,
            filter,
        }
    }

    /// Mine all documents (already cleaned) into a candidate map.
    ///
    /// Tokenization goes through the normalizer's memoizing cache, so
    /// repeated document bodies tokenize once.
    pub fn mine(&self, documents: &[Document], normalizer: &TextNormalizer) -> CandidateMap {
        let mut candidates = CandidateMap::default();
        let mut next_seen = 0u64;

        for doc in documents {
            let tokens = normalizer.tokenize(&doc.text);
            for n in 1..=self.ngram_limit {
                if n > tokens.len() {
                    break;
                }
                for window in tokens.windows(n) {
                    if !self.filter.accepts(window) {
                        continue;
                    }
                    let phrase = window.join(" ");
                    let key = phrase.to_lowercase();
                    match candidates.entry(key) {
                        std::collections::hash_map::Entry::Occupied(mut entry) => {
                            let stats = entry.get_mut();
                            stats.count += 1;
                            if !has_uppercase(&stats.exemplar) && has_uppercase(&phrase) {
                                stats.exemplar = phrase;
                            }
                        }
                        std::collections::hash_map::Entry::Vacant(slot) => {
                            slot.insert(CandidateStats {
                                count: 1,
                                exemplar: phrase,
                                first_seen: next_seen,
                            });
                            next_seen += 1;
                        }
                    }
                }
            }
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::Lexicon;
    use crate::types::SalienceConfig;
    use std::sync::Arc;

    fn miner(ngram_limit: usize, cap_filter: bool) -> NGramMiner {
        let config = SalienceConfig::new()
            .with_ngram_limit(ngram_limit)
            .with_capitalization_filter(cap_filter);
        let filter = CandidateFilter::new(Arc::new(Lexicon::english()), &config);
        NGramMiner::new(ngram_limit, filter)
    }

    fn docs(texts: &[&str]) -> Vec<Document> {
        texts.iter().map(|t| Document::new(*t, 1)).collect()
    }

    #[test]
    fn test_counts_across_documents() {
        let m = miner(3, true);
        let normalizer = TextNormalizer::new();
        let documents = docs(&[
            "Great Barrier Reef is amazing",
            "The Great Barrier Reef trip",
            "Barrier Reef dive",
        ]);

        let map = m.mine(&documents, &normalizer);

        assert_eq!(map["barrier reef"].count, 3);
        assert_eq!(map["great barrier reef"].count, 2);
        assert_eq!(map["great barrier"].count, 2);
    }

    #[test]
    fn test_rejected_candidates_are_not_counted() {
        let m = miner(3, true);
        let normalizer = TextNormalizer::new();
        let documents = docs(&["Great Barrier Reef is amazing"]);

        let map = m.mine(&documents, &normalizer);

        // "Reef is" ends lowercase; "is amazing" is all lowercase.
        assert!(!map.contains_key("reef is"));
        assert!(!map.contains_key("is amazing"));
        assert!(!map.contains_key("is"));
    }

    #[test]
    fn test_exemplar_prefers_capitalized_rendering() {
        let m = miner(2, false);
        let normalizer = TextNormalizer::new();
        let documents = docs(&["barrier reef dive", "Barrier Reef dive"]);

        let map = m.mine(&documents, &normalizer);

        let stats = &map["barrier reef"];
        assert_eq!(stats.count, 2);
        assert_eq!(stats.exemplar, "Barrier Reef");
    }

    #[test]
    fn test_exemplar_keeps_first_capitalized_rendering() {
        let m = miner(2, false);
        let normalizer = TextNormalizer::new();
        let documents = docs(&["Barrier Reef dive", "BARRIER REEF dive"]);

        let map = m.mine(&documents, &normalizer);

        assert_eq!(map["barrier reef"].exemplar, "Barrier Reef");
    }

    #[test]
    fn test_first_seen_tracks_mining_order() {
        let m = miner(2, true);
        let normalizer = TextNormalizer::new();
        let documents = docs(&["Barrier Reef", "Coral Garden"]);

        let map = m.mine(&documents, &normalizer);

        // Unigrams of doc 1 come before bigrams of doc 1, which come
        // before anything in doc 2.
        assert!(map["barrier"].first_seen < map["barrier reef"].first_seen);
        assert!(map["barrier reef"].first_seen < map["coral garden"].first_seen);
    }

    #[test]
    fn test_window_longer_than_document() {
        let m = miner(5, true);
        let normalizer = TextNormalizer::new();
        let documents = docs(&["Reef"]);

        let map = m.mine(&documents, &normalizer);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("reef"));
    }

    #[test]
    fn test_empty_documents_yield_no_candidates() {
        let m = miner(3, true);
        let normalizer = TextNormalizer::new();
        let map = m.mine(&docs(&["", "   "]), &normalizer);
        assert!(map.is_empty());
    }
}
