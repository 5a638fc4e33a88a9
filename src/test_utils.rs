// Shared test helpers: entry builders and a call-counting fake backend

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::LookupConfig;
use crate::lexicon::{DictionaryEntry, EntryKey, LexiconBackend, LexiconError, MemoryBackend, Sense};
use crate::lookup::LookupEngine;

/// Build an entry with a single one-gloss sense
pub fn entry(
    dictionary_id: i64,
    entry_id: i64,
    expression: Option<&str>,
    reading: &str,
    frequency: i64,
) -> DictionaryEntry {
    DictionaryEntry {
        dictionary_id,
        entry_id,
        expression: expression.map(str::to_string),
        reading: reading.to_string(),
        senses: vec![Sense {
            glosses: vec![format!("gloss of {}", expression.unwrap_or(reading))],
            ..Sense::default()
        }],
        frequency,
        proficiency_level: None,
        lookup_count: 0,
    }
}

/// Shorthand for an entry whose expression and reading differ
pub fn word(entry_id: i64, expression: &str, reading: &str) -> DictionaryEntry {
    entry(1, entry_id, Some(expression), reading, 0)
}

/// Fake backend that counts every call and can be switched to fail
#[derive(Debug, Default)]
pub struct CountingBackend {
    pub inner: MemoryBackend,
    pub exact_calls: AtomicUsize,
    pub bulk_calls: AtomicUsize,
    pub record_calls: AtomicUsize,
    pub fail: AtomicBool,
}

impl CountingBackend {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self {
            inner: MemoryBackend::new(entries),
            ..Self::default()
        }
    }

    pub fn exact_calls(&self) -> usize {
        self.exact_calls.load(Ordering::SeqCst)
    }

    pub fn bulk_calls(&self) -> usize {
        self.bulk_calls.load(Ordering::SeqCst)
    }

    pub fn record_calls(&self) -> usize {
        self.record_calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), LexiconError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(LexiconError::Unavailable("backend offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LexiconBackend for CountingBackend {
    async fn find_exact(
        &self,
        term: &str,
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Option<DictionaryEntry>, LexiconError> {
        self.exact_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_exact(term, dictionary_filter).await
    }

    async fn find_bulk(
        &self,
        terms: &[String],
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Vec<DictionaryEntry>, LexiconError> {
        self.bulk_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.find_bulk(terms, dictionary_filter).await
    }

    async fn record_lookup(&self, key: EntryKey) -> Result<(), LexiconError> {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.record_lookup(key).await
    }
}

/// Engine over a counting backend with the given config
pub fn engine_with_config(
    entries: Vec<DictionaryEntry>,
    config: LookupConfig,
) -> (LookupEngine, Arc<CountingBackend>) {
    let backend = Arc::new(CountingBackend::new(entries));
    let engine = LookupEngine::from_config(backend.clone(), config);
    (engine, backend)
}

/// Engine over a counting backend with default config
pub fn engine_with(entries: Vec<DictionaryEntry>) -> (LookupEngine, Arc<CountingBackend>) {
    engine_with_config(entries, LookupConfig::default())
}
