//! Text normalization and memoized tokenization.
//!
//! Cleaning keeps only alphabetic characters and single spaces: URL-like
//! tokens are dropped whole, everything else loses its non-letter
//! characters, and whitespace runs collapse. The result is idempotent,
//! so `normalize(normalize(x)) == normalize(x)` for every input.

use std::sync::Arc;

use crate::nlp::cache::TokenCache;
use crate::types::Document;

/// Whether a whitespace-delimited token looks like a URL.
fn is_url_like(token: &str) -> bool {
    let lower = token.to_lowercase();
    lower.contains("http://") || lower.contains("https://") || lower.starts_with("www.")
}

/// Cleans raw text and tokenizes it, memoizing token lists in a bounded
/// LRU cache keyed by the exact cleaned text.
#[derive(Debug, Default)]
pub struct TextNormalizer {
    cache: TokenCache,
}

impl TextNormalizer {
    /// Create a normalizer with the default cache capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer whose token cache holds at most
    /// `cache_capacity` entries.
    pub fn with_cache_capacity(cache_capacity: usize) -> Self {
        Self {
            cache: TokenCache::new(cache_capacity),
        }
    }

    /// Clean raw text: drop URL-like tokens, strip characters outside
    /// letters and whitespace, collapse whitespace runs, trim.
    pub fn normalize(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for word in raw.split_whitespace() {
            if is_url_like(word) {
                continue;
            }
            let start = out.len();
            if !out.is_empty() {
                out.push(' ');
            }
            let mut wrote = false;
            for ch in word.chars() {
                if ch.is_alphabetic() {
                    out.push(ch);
                    wrote = true;
                }
            }
            if !wrote {
                // Token had no letters; undo the separator.
                out.truncate(start);
            }
        }
        out
    }

    /// Tokenize already-cleaned text into words, memoized by exact text.
    pub fn tokenize(&self, cleaned: &str) -> Arc<Vec<String>> {
        if let Some(tokens) = self.cache.get(cleaned) {
            return tokens;
        }
        let tokens: Arc<Vec<String>> =
            Arc::new(cleaned.split_whitespace().map(str::to_string).collect());
        self.cache.insert(cleaned.to_string(), Arc::clone(&tokens));
        tokens
    }

    /// Clean and tokenize in one step.
    pub fn normalize_and_tokenize(&self, raw: &str) -> Arc<Vec<String>> {
        let cleaned = self.normalize(raw);
        self.tokenize(&cleaned)
    }

    /// Normalize a batch of documents, rewriting each `text` in place.
    pub fn normalize_documents(&self, documents: &mut [Document]) {
        for doc in documents {
            doc.text = self.normalize(&doc.text);
        }
    }

    /// Number of memoized token lists.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_digits() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("Great, Barrier!! Reef 2024"), "Great Barrier Reef");
        assert_eq!(n.normalize("don't stop"), "dont stop");
    }

    #[test]
    fn test_normalize_drops_urls() {
        let n = TextNormalizer::new();
        assert_eq!(
            n.normalize("see https://example.com/reef for pics"),
            "see for pics"
        );
        assert_eq!(n.normalize("www.example.com is down"), "is down");
        assert_eq!(n.normalize("http://a.b"), "");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let n = TextNormalizer::new();
        for raw in [
            "Great Barrier Reef is amazing",
            "  mixed 123 ca$es!! https://x.y z ",
            "",
            "   \t\n",
            "www.site.org alone",
        ] {
            let once = n.normalize(raw);
            assert_eq!(n.normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_normalize_empty_and_symbol_only() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("123 !!! ..."), "");
    }

    #[test]
    fn test_tokenize_memoizes() {
        let n = TextNormalizer::new();
        let a = n.tokenize("great barrier reef");
        let b = n.tokenize("great barrier reef");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(n.cached_entries(), 1);
    }

    #[test]
    fn test_normalize_and_tokenize() {
        let n = TextNormalizer::new();
        let tokens = n.normalize_and_tokenize("The Great Barrier Reef trip!");
        assert_eq!(
            tokens.as_slice(),
            ["The", "Great", "Barrier", "Reef", "trip"]
        );
    }

    #[test]
    fn test_normalize_documents_in_place() {
        let n = TextNormalizer::new();
        let mut docs = vec![
            Document::new("Reef!! dive @2pm", 5),
            Document::new("https://spam.example only", -1),
        ];
        n.normalize_documents(&mut docs);
        assert_eq!(docs[0].text, "Reef dive pm");
        assert_eq!(docs[1].text, "only");
        // Weights untouched.
        assert_eq!(docs[1].weight, -1);
    }
}
