// In-process lexicon backend for small dictionaries and tests

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{rank_order, DictionaryEntry, EntryKey, LexiconBackend, LexiconError};

/// Backend holding all entries in memory.
///
/// Queries are linear scans; suitable for a few thousand entries. Larger
/// lexicons belong in the indexed libsql store.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<Vec<DictionaryEntry>>,
}

impl MemoryBackend {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Add an entry, replacing any existing entry with the same key
    pub fn insert(&self, entry: DictionaryEntry) {
        let mut entries = self.entries.write();
        entries.retain(|existing| existing.key() != entry.key());
        entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Current lookup counter of an entry
    pub fn lookup_count(&self, key: EntryKey) -> Option<i64> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.key() == key)
            .map(|entry| entry.lookup_count)
    }

    fn ranked_matches<F>(&self, dictionary_filter: Option<&[i64]>, matches: F) -> Vec<DictionaryEntry>
    where
        F: Fn(&DictionaryEntry) -> bool,
    {
        let mut found: Vec<DictionaryEntry> = self
            .entries
            .read()
            .iter()
            .filter(|entry| entry.in_dictionaries(dictionary_filter) && matches(entry))
            .cloned()
            .collect();
        found.sort_by(rank_order);
        found
    }
}

#[async_trait]
impl LexiconBackend for MemoryBackend {
    async fn find_exact(
        &self,
        term: &str,
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Option<DictionaryEntry>, LexiconError> {
        Ok(self
            .ranked_matches(dictionary_filter, |entry| entry.matches_term(term))
            .into_iter()
            .next())
    }

    async fn find_bulk(
        &self,
        terms: &[String],
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Vec<DictionaryEntry>, LexiconError> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.ranked_matches(dictionary_filter, |entry| {
            terms.iter().any(|term| entry.matches_term(term))
        }))
    }

    async fn record_lookup(&self, key: EntryKey) -> Result<(), LexiconError> {
        if let Some(entry) = self.entries.write().iter_mut().find(|entry| entry.key() == key) {
            entry.lookup_count += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
