//! Token cache with LRU eviction.
//!
//! Many short documents repeat identical or quoted text, so tokenization
//! results are memoized keyed by the exact cleaned text. The cache is
//! instance-owned (parallel pipeline instances never interfere), bounded,
//! and safe for concurrent readers: entries are `Arc`-shared, so an
//! eviction can never invalidate a token list another reader holds.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, RwLock};

/// Default number of cached token lists.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Bounded memoization cache mapping cleaned text to its token list.
pub struct TokenCache {
    inner: RwLock<LruCache<String, Arc<Vec<String>>>>,
}

impl TokenCache {
    /// Create a cache holding at most `capacity` entries. A capacity of
    /// zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Look up a cached token list, refreshing its recency.
    pub fn get(&self, cleaned: &str) -> Option<Arc<Vec<String>>> {
        let mut cache = self.inner.write().ok()?;
        cache.get(cleaned).cloned()
    }

    /// Insert a token list, evicting the least recently used entry when
    /// at capacity.
    pub fn insert(&self, cleaned: String, tokens: Arc<Vec<String>>) {
        if let Ok(mut cache) = self.inner.write() {
            cache.put(cleaned, tokens);
        }
    }

    /// Current number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache").field("len", &self.len()).finish()
    }
}
