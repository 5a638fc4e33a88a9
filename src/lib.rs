// Dictionary lookup and deinflection engine.
//
// Given selected or OCR'd text and a language code, finds the longest
// dictionary entry starting at a position, trying deinflected forms of each
// candidate substring along the way.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod boundary;
pub mod config;
pub mod deinflect;
pub mod language;
pub mod lexicon;
pub mod lookup;
pub mod turso;
pub mod util;

#[cfg(test)]
mod test_utils;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use boundary::WordBoundaryExtractor;
pub use config::{ConfigError, LookupConfig};
pub use deinflect::{DeinflectionResult, DeinflectionRule, Deinflector, VerbClass};
pub use language::{Language, Strategy};
pub use lexicon::{
    DictionaryEntry, EntryKey, LexiconBackend, LexiconError, LexiconStore, MemoryBackend, Sense,
};
pub use lookup::{BatchLookupOptimizer, LookupEngine, LookupError, LookupResult, SentenceScanner};
pub use turso::TursoClient;
