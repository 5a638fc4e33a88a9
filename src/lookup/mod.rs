//! Lookup orchestration: progressive substring matching, sentence scanning,
//! and the batched variant that resolves a whole window in one store query.

mod batch;
mod engine;
mod scanner;

use serde::Serialize;

use crate::deinflect::DeinflectionResult;
use crate::lexicon::{DictionaryEntry, LexiconError};

pub use batch::BatchLookupOptimizer;
pub use engine::LookupEngine;
pub use scanner::SentenceScanner;

/// A dictionary match for text starting at `source_offset`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub entry: DictionaryEntry,
    /// Surface text that matched
    pub matched_text: String,
    /// Length of `matched_text` in characters
    pub match_length: usize,
    /// Form the entry was found under
    pub deinflected_form: String,
    pub applied_rules: Vec<String>,
    /// Character offset of `matched_text` in the caller's text
    pub source_offset: usize,
}

impl LookupResult {
    pub fn was_deinflected(&self) -> bool {
        !self.applied_rules.is_empty()
    }
}

/// Error types for lookup operations.
///
/// A missing match is never an error; only store faults are.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// The Lexicon Store failed
    #[error(transparent)]
    Store(#[from] LexiconError),
    /// No runtime was available for a blocking lookup
    #[error("Lookup runtime error: {0}")]
    Runtime(String),
}

/// One surface span to try, with its candidates in try order
#[derive(Debug, Clone)]
pub(crate) struct Attempt {
    pub matched_text: String,
    pub match_length: usize,
    pub source_offset: usize,
    pub candidates: Vec<DeinflectionResult>,
}

impl Attempt {
    pub fn into_result(self, candidate: DeinflectionResult, entry: DictionaryEntry) -> LookupResult {
        LookupResult {
            entry,
            matched_text: self.matched_text,
            match_length: self.match_length,
            deinflected_form: candidate.term,
            applied_rules: candidate.rules,
            source_offset: self.source_offset,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
