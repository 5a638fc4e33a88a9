//! Lexicon Store: dictionary entries, the backing-store seam, and the
//! caching adapter the lookup engine talks to.
//!
//! The backing store is anything implementing [`LexiconBackend`]; the
//! primary implementations are the libsql-backed [`crate::TursoClient`]
//! and the in-process [`MemoryBackend`]. [`LexiconStore`] wraps a backend
//! with a bounded LRU cache and is the only shared mutable state in the
//! engine.

mod cache;
mod memory;
mod store;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub use cache::LruCache;
pub use memory::MemoryBackend;
pub use store::LexiconStore;

/// Identity of an entry across all installed dictionaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryKey {
    pub dictionary_id: i64,
    pub entry_id: i64,
}

/// One meaning of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    /// Glosses in display order
    pub glosses: Vec<String>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub cross_references: Vec<String>,
}

/// A dictionary entry as stored in the lexicon.
///
/// Read-only from the lookup engine's point of view; `lookup_count` is owned
/// and incremented by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub dictionary_id: i64,
    pub entry_id: i64,
    /// Primary written form, absent for kana-only or reading-only entries
    #[serde(default)]
    pub expression: Option<String>,
    /// Primary pronunciation
    pub reading: String,
    #[serde(default)]
    pub senses: Vec<Sense>,
    /// Higher is more common
    #[serde(default)]
    pub frequency: i64,
    /// Proficiency tag such as "N5" or "A1"
    #[serde(default)]
    pub proficiency_level: Option<String>,
    #[serde(default)]
    pub lookup_count: i64,
}

impl DictionaryEntry {
    pub fn key(&self) -> EntryKey {
        EntryKey {
            dictionary_id: self.dictionary_id,
            entry_id: self.entry_id,
        }
    }

    /// Exact match on written form or reading
    pub fn matches_term(&self, term: &str) -> bool {
        self.expression.as_deref() == Some(term) || self.reading == term
    }

    /// Keys this entry can be found under: expression (if any), then reading
    pub fn search_keys(&self) -> impl Iterator<Item = &str> {
        self.expression
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.reading.as_str()))
    }

    pub fn in_dictionaries(&self, dictionary_filter: Option<&[i64]>) -> bool {
        dictionary_filter.map_or(true, |ids| ids.contains(&self.dictionary_id))
    }
}

/// Ranking shared by every backend: frequency descending, then dictionary
/// id and entry id ascending. Keeps exact and bulk queries in agreement.
pub fn rank_order(a: &DictionaryEntry, b: &DictionaryEntry) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then(a.dictionary_id.cmp(&b.dictionary_id))
        .then(a.entry_id.cmp(&b.entry_id))
}

/// Error types for lexicon store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexiconError {
    /// Backing store could not be reached or opened
    #[error("Lexicon store unavailable: {0}")]
    Unavailable(String),
    /// Query failed while executing or reading rows
    #[error("Lexicon query failed: {0}")]
    Query(String),
    /// Stored data could not be decoded
    #[error("Corrupt lexicon entry: {0}")]
    Corrupt(String),
}

/// Backend trait for exact-match lexicon queries.
///
/// Implementations must order results with [`rank_order`] so that
/// `find_exact(t)` equals the first entry of `find_bulk([t])` that matches `t`.
#[async_trait]
pub trait LexiconBackend: Send + Sync {
    /// Highest-ranked entry whose expression or reading equals `term`.
    async fn find_exact(
        &self,
        term: &str,
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Option<DictionaryEntry>, LexiconError>;

    /// Every entry whose expression or reading is in `terms`, ranked.
    async fn find_bulk(
        &self,
        terms: &[String],
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Vec<DictionaryEntry>, LexiconError>;

    /// Increment the lookup counter of an entry.
    async fn record_lookup(&self, key: EntryKey) -> Result<(), LexiconError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
