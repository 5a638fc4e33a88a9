// Lookup orchestrator - longest-first progressive matching over the
// Lexicon Store, with the word-boundary path for space-delimited languages.

use std::sync::Arc;

use super::{Attempt, LookupError, LookupResult};
use crate::boundary::WordBoundaryExtractor;
use crate::config::LookupConfig;
use crate::deinflect::{Deinflector, SurfaceDeinflector};
use crate::language::{Language, Strategy};
use crate::lexicon::{DictionaryEntry, LexiconBackend, LexiconStore};

/// Finds the longest dictionary entry at a position in text.
///
/// Holds no per-call state; one engine can serve concurrent lookups.
#[derive(Debug)]
pub struct LookupEngine {
    store: Arc<LexiconStore>,
    config: LookupConfig,
    boundaries: WordBoundaryExtractor,
}

impl LookupEngine {
    pub fn new(store: Arc<LexiconStore>, config: LookupConfig) -> Self {
        Self {
            store,
            config,
            boundaries: WordBoundaryExtractor::new(),
        }
    }

    /// Build an engine and its Lexicon Store from a backend and config
    pub fn from_config(backend: Arc<dyn LexiconBackend>, config: LookupConfig) -> Self {
        let store = Arc::new(LexiconStore::new(backend, config.cache_capacity));
        Self::new(store, config)
    }

    pub fn store(&self) -> &Arc<LexiconStore> {
        &self.store
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Look up the text from its first character.
    pub async fn lookup(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Option<LookupResult>, LookupError> {
        self.lookup_at(text, 0, language).await
    }

    /// Look up the text starting at character `offset`.
    ///
    /// Blank text or an offset past the end yields `None`.
    pub async fn lookup_at(
        &self,
        text: &str,
        offset: usize,
        language: Language,
    ) -> Result<Option<LookupResult>, LookupError> {
        self.first_match(self.attempts(text, offset, language)).await
    }

    /// Lookup used by sentence scanning: the text is read from `start` on,
    /// so space-delimited matches begin exactly at `start`.
    pub(crate) async fn scan_at(
        &self,
        text: &str,
        start: usize,
        language: Language,
    ) -> Result<Option<LookupResult>, LookupError> {
        self.first_match(self.scan_attempts(text, start, language)).await
    }

    /// First attempt, then first candidate within it, found in the store
    async fn first_match(
        &self,
        attempts: Vec<Attempt>,
    ) -> Result<Option<LookupResult>, LookupError> {
        let filter = self.config.dictionary_filter();

        for mut attempt in attempts {
            let mut found = None;
            for (index, candidate) in attempt.candidates.iter().enumerate() {
                if let Some(entry) = self.store.find_exact(&candidate.term, filter).await? {
                    found = Some((index, entry));
                    break;
                }
            }

            if let Some((index, entry)) = found {
                let candidate = attempt.candidates.swap_remove(index);
                crate::debug!(
                    "Matched '{}' as '{}' ({} rules)",
                    attempt.matched_text,
                    candidate.term,
                    candidate.rules.len()
                );
                self.record(&entry).await;
                return Ok(Some(attempt.into_result(candidate, entry)));
            }
        }

        Ok(None)
    }

    /// Look up each term independently, in input order. Terms without a
    /// match are omitted; a store fault fails the whole call.
    pub async fn lookup_bulk(
        &self,
        terms: &[String],
        language: Language,
    ) -> Result<Vec<LookupResult>, LookupError> {
        let mut results = Vec::with_capacity(terms.len());
        for term in terms {
            if let Some(result) = self.lookup(term, language).await? {
                results.push(result);
            }
        }
        Ok(results)
    }

    /// [`Self::lookup`] for synchronous callers.
    ///
    /// Fails with [`LookupError::Runtime`] when called from inside a
    /// current-thread Tokio runtime.
    pub fn lookup_blocking(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Option<LookupResult>, LookupError> {
        crate::util::run_async(self.lookup(text, language))
            .map_err(|e| LookupError::Runtime(e.to_string()))?
    }

    /// Every span to try at `offset`, in selection order.
    pub(crate) fn attempts(&self, text: &str, offset: usize, language: Language) -> Vec<Attempt> {
        match language.strategy() {
            Strategy::Conjugating | Strategy::Unsegmented => {
                self.prefix_attempts(text, offset, language.deinflector())
            }
            Strategy::SpaceDelimited => self.word_attempts(text, offset),
        }
    }

    /// Attempts for a scan position. Space-delimited text is cut at `start`
    /// so the word never extends back before the cursor.
    pub(crate) fn scan_attempts(
        &self,
        text: &str,
        start: usize,
        language: Language,
    ) -> Vec<Attempt> {
        match language.strategy() {
            Strategy::SpaceDelimited => {
                let rest: String = text.chars().skip(start).collect();
                let mut attempts = self.word_attempts(&rest, 0);
                for attempt in &mut attempts {
                    attempt.source_offset += start;
                }
                attempts
            }
            Strategy::Conjugating | Strategy::Unsegmented => self.attempts(text, start, language),
        }
    }

    /// Prefixes of the window at `offset`, longest first
    fn prefix_attempts(
        &self,
        text: &str,
        offset: usize,
        deinflector: &dyn Deinflector,
    ) -> Vec<Attempt> {
        let window: String = text
            .chars()
            .skip(offset)
            .take(self.config.max_lookup_length)
            .collect();
        if window.trim().is_empty() {
            return Vec::new();
        }

        let ends: Vec<usize> = window
            .char_indices()
            .map(|(start, c)| start + c.len_utf8())
            .collect();

        ends.iter()
            .enumerate()
            .rev()
            .map(|(index, &end)| {
                let substring = &window[..end];
                Attempt {
                    matched_text: substring.to_string(),
                    match_length: index + 1,
                    source_offset: offset,
                    candidates: deinflector.deinflect(substring),
                }
            })
            .collect()
    }

    /// The word around `offset` with its surface variants
    fn word_attempts(&self, text: &str, offset: usize) -> Vec<Attempt> {
        let Some((start, word)) = self.boundaries.extract_span_at(text, offset) else {
            return Vec::new();
        };

        let word: String = word.chars().take(self.config.max_lookup_length).collect();
        let candidates = SurfaceDeinflector.deinflect(&word);
        vec![Attempt {
            match_length: word.chars().count(),
            matched_text: word,
            source_offset: start,
            candidates,
        }]
    }

    /// Bump the entry's lookup counter. Failure does not fail the lookup.
    pub(crate) async fn record(&self, entry: &DictionaryEntry) {
        if !self.config.record_lookups {
            return;
        }
        if let Err(e) = self.store.record_lookup(entry).await {
            crate::warn!(
                "Failed to record lookup of entry {}/{}: {}",
                entry.dictionary_id,
                entry.entry_id,
                e
            );
        }
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
