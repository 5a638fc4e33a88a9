// Lexicon Store adapter - exact and bulk queries with a bounded LRU cache
// in front of the backing store. Cache locks are never held across awaits.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::cache::LruCache;
use super::{rank_order, DictionaryEntry, LexiconBackend, LexiconError};
use crate::config::DEFAULT_CACHE_CAPACITY;

/// Cache key: the raw search term plus the normalized dictionary filter, so
/// filtered and unfiltered queries for the same term never share a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    term: String,
    filter: Option<Vec<i64>>,
}

impl CacheKey {
    fn new(term: &str, dictionary_filter: Option<&[i64]>) -> Self {
        let filter = dictionary_filter.map(|ids| {
            let mut ids = ids.to_vec();
            ids.sort_unstable();
            ids.dedup();
            ids
        });
        Self {
            term: term.to_string(),
            filter,
        }
    }
}

/// Caching adapter over a [`LexiconBackend`].
///
/// Safe to share between concurrent lookups. A cache miss always falls
/// through to the backend, and backend errors are returned unchanged.
pub struct LexiconStore {
    backend: Arc<dyn LexiconBackend>,
    cache: Mutex<LruCache<CacheKey, DictionaryEntry>>,
}

impl std::fmt::Debug for LexiconStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconStore")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

impl LexiconStore {
    /// Create a store with the given cache capacity. A zero capacity falls
    /// back to [`DEFAULT_CACHE_CAPACITY`].
    pub fn new(backend: Arc<dyn LexiconBackend>, cache_capacity: usize) -> Self {
        let cache_capacity = if cache_capacity == 0 {
            crate::warn!(
                "Lexicon cache capacity 0 is invalid, using default {}",
                DEFAULT_CACHE_CAPACITY
            );
            DEFAULT_CACHE_CAPACITY
        } else {
            cache_capacity
        };

        Self {
            backend,
            cache: Mutex::new(LruCache::new(cache_capacity)),
        }
    }

    /// Highest-ranked entry whose expression or reading equals `term`.
    pub async fn find_exact(
        &self,
        term: &str,
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Option<DictionaryEntry>, LexiconError> {
        let key = CacheKey::new(term, dictionary_filter);

        let cached = self.cache.lock().get(&key);
        if let Some(entry) = cached {
            crate::trace!("Lexicon cache hit for '{}'", term);
            return Ok(Some(entry));
        }

        let found = self.backend.find_exact(term, dictionary_filter).await?;
        if let Some(entry) = &found {
            crate::trace!("Lexicon cache fill for '{}'", term);
            self.cache.lock().insert(key, entry.clone());
        }
        Ok(found)
    }

    /// Entries for any of `terms`: for each distinct term, in input order,
    /// the entry `find_exact` would return for it. An entry reached through
    /// several terms appears once.
    ///
    /// Issues at most one backend query and none when every term is cached.
    pub async fn find_bulk(
        &self,
        terms: &[String],
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Vec<DictionaryEntry>, LexiconError> {
        let resolved = self.resolve_bulk(terms, dictionary_filter).await?;

        let mut keys = HashSet::new();
        Ok(terms
            .iter()
            .filter_map(|term| resolved.get(term))
            .filter(|entry| keys.insert(entry.key()))
            .cloned()
            .collect())
    }

    /// Resolve every term to its best-ranked entry in one backend round trip.
    /// Terms without an entry are absent from the map.
    pub async fn resolve_bulk(
        &self,
        terms: &[String],
        dictionary_filter: Option<&[i64]>,
    ) -> Result<HashMap<String, DictionaryEntry>, LexiconError> {
        let mut resolved = HashMap::with_capacity(terms.len());
        let mut uncached: Vec<String> = Vec::new();

        {
            let mut cache = self.cache.lock();
            let mut seen = HashSet::new();
            for term in terms {
                if !seen.insert(term.as_str()) {
                    continue;
                }
                match cache.get(&CacheKey::new(term, dictionary_filter)) {
                    Some(entry) => {
                        resolved.insert(term.clone(), entry);
                    }
                    None => uncached.push(term.clone()),
                }
            }
        }

        if uncached.is_empty() {
            crate::trace!("Lexicon bulk query fully cached ({} terms)", resolved.len());
            return Ok(resolved);
        }

        crate::debug!(
            "Lexicon bulk query: {} cached, {} uncached",
            resolved.len(),
            uncached.len()
        );

        let mut fetched = self.backend.find_bulk(&uncached, dictionary_filter).await?;
        fetched.sort_by(rank_order);

        // Fetched entries are ranked, so the first entry seen for a term is
        // the one find_exact would return. Keys outside the queried set are
        // not cached: the result set does not prove what they resolve to.
        let queried: HashSet<&str> = uncached.iter().map(String::as_str).collect();
        let mut cache = self.cache.lock();
        for entry in &fetched {
            for key in entry.search_keys() {
                if queried.contains(key) && !resolved.contains_key(key) {
                    cache.insert(CacheKey::new(key, dictionary_filter), entry.clone());
                    resolved.insert(key.to_string(), entry.clone());
                }
            }
        }

        Ok(resolved)
    }

    /// Bump the entry's lookup counter in the backing store.
    pub async fn record_lookup(&self, entry: &DictionaryEntry) -> Result<(), LexiconError> {
        self.backend.record_lookup(entry.key()).await
    }

    /// Number of cached terms
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Maximum number of cached terms
    pub fn cache_capacity(&self) -> usize {
        self.cache.lock().capacity()
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
