// Batched lookups - every candidate of a window resolved in one Lexicon
// Store round trip, then selected exactly like the per-call path.

use std::collections::{HashMap, HashSet};

use super::scanner::{advance_past, next_target};
use super::{Attempt, LookupEngine, LookupError, LookupResult};
use crate::language::Language;
use crate::lexicon::DictionaryEntry;

/// Throughput variant of [`LookupEngine`] lookups.
///
/// Selects the same match as the engine for the same input and store
/// state, but issues one bulk query per window instead of one exact query
/// per candidate.
#[derive(Debug, Clone, Copy)]
pub struct BatchLookupOptimizer<'a> {
    engine: &'a LookupEngine,
}

impl<'a> BatchLookupOptimizer<'a> {
    pub fn new(engine: &'a LookupEngine) -> Self {
        Self { engine }
    }

    /// Batched [`LookupEngine::lookup_at`]
    pub async fn lookup_at(
        &self,
        text: &str,
        offset: usize,
        language: Language,
    ) -> Result<Option<LookupResult>, LookupError> {
        self.first_match(self.engine.attempts(text, offset, language)).await
    }

    /// Batched [`LookupEngine::lookup_bulk`]: one store query for all terms
    pub async fn lookup_bulk(
        &self,
        terms: &[String],
        language: Language,
    ) -> Result<Vec<LookupResult>, LookupError> {
        let per_term: Vec<Vec<Attempt>> = terms
            .iter()
            .map(|term| self.engine.attempts(term, 0, language))
            .collect();
        let all: Vec<Attempt> = per_term.iter().flatten().cloned().collect();
        let resolved = self.resolve(&all).await?;

        let mut results = Vec::with_capacity(terms.len());
        for attempts in per_term {
            if let Some(result) = select(attempts, &resolved) {
                self.engine.record(&result.entry).await;
                results.push(result);
            }
        }
        Ok(results)
    }

    /// Batched [`super::SentenceScanner::scan`]: one store query per match
    /// position rather than per candidate.
    pub async fn scan(
        &self,
        text: &str,
        language: Language,
        max_results: Option<usize>,
    ) -> Result<Vec<LookupResult>, LookupError> {
        let max_results =
            max_results.unwrap_or(self.engine.config().max_sentence_results);
        let chars: Vec<char> = text.chars().collect();
        let mut results = Vec::new();
        let mut offset = 0;

        while offset < chars.len() && results.len() < max_results {
            let Some(start) = next_target(&chars, offset, language) else {
                break;
            };

            let attempts = self.engine.scan_attempts(text, start, language);
            match self.first_match(attempts).await? {
                Some(result) => {
                    offset = advance_past(start, &result);
                    results.push(result);
                }
                None => offset = start + 1,
            }
        }

        Ok(results)
    }

    async fn first_match(
        &self,
        attempts: Vec<Attempt>,
    ) -> Result<Option<LookupResult>, LookupError> {
        let resolved = self.resolve(&attempts).await?;

        let found = select(attempts, &resolved);
        if let Some(result) = &found {
            self.engine.record(&result.entry).await;
        }
        Ok(found)
    }

    async fn resolve(
        &self,
        attempts: &[Attempt],
    ) -> Result<HashMap<String, DictionaryEntry>, LookupError> {
        let mut seen = HashSet::new();
        let terms: Vec<String> = attempts
            .iter()
            .flat_map(|attempt| attempt.candidates.iter())
            .filter(|candidate| seen.insert(candidate.term.as_str()))
            .map(|candidate| candidate.term.clone())
            .collect();

        if terms.is_empty() {
            return Ok(HashMap::new());
        }

        crate::trace!("Resolving {} candidate terms in one batch", terms.len());
        let filter = self.engine.config().dictionary_filter();
        Ok(self.engine.store().resolve_bulk(&terms, filter).await?)
    }
}

/// First attempt, then first candidate within it, that resolved
fn select(
    attempts: Vec<Attempt>,
    resolved: &HashMap<String, DictionaryEntry>,
) -> Option<LookupResult> {
    attempts.into_iter().find_map(|mut attempt| {
        let index = attempt
            .candidates
            .iter()
            .position(|candidate| resolved.contains_key(&candidate.term))?;
        let candidate = attempt.candidates.swap_remove(index);
        let entry = resolved.get(&candidate.term)?.clone();
        Some(attempt.into_result(candidate, entry))
    })
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
