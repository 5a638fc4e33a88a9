// Lookup engine configuration - defaults, JSON file loading, validation

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Longest substring the orchestrator will ever inspect, in characters
pub const DEFAULT_MAX_LOOKUP_LENGTH: usize = 25;

/// Lexicon Store LRU capacity
pub const DEFAULT_CACHE_CAPACITY: usize = 500;

/// Default cap on sentence-mode results
pub const DEFAULT_MAX_SENTENCE_RESULTS: usize = 64;

/// Error types for configuration handling
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or parse the configuration file
    #[error("Failed to load config: {0}")]
    LoadError(String),
    /// A value is out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for the lookup engine.
///
/// Every field has a default, so a partial JSON file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupConfig {
    /// Characters considered from the start of each lookup
    pub max_lookup_length: usize,
    /// Entries held by the Lexicon Store cache
    pub cache_capacity: usize,
    /// Result cap for sentence scanning when the caller does not give one
    pub max_sentence_results: usize,
    /// Only consult these dictionaries; `None` means all installed ones
    pub dictionary_filter: Option<Vec<i64>>,
    /// Increment an entry's lookup counter on every successful match
    pub record_lookups: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_lookup_length: DEFAULT_MAX_LOOKUP_LENGTH,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_sentence_results: DEFAULT_MAX_SENTENCE_RESULTS,
            dictionary_filter: None,
            record_lookups: true,
        }
    }
}

impl LookupConfig {
    /// Default config file location: `<config dir>/yomi-lookup/config.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("yomi-lookup").join("config.json"))
            .ok_or_else(|| {
                ConfigError::LoadError("Could not determine config directory".to_string())
            })
    }

    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        crate::debug!("Loading lookup config from {:?}", path);

        if !path.exists() {
            crate::debug!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::LoadError(e.to_string()))?;
        config.validate()?;

        crate::info!(
            "Loaded lookup config (max length {}, cache {})",
            config.max_lookup_length,
            config.cache_capacity
        );
        Ok(config)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lookup_length == 0 {
            return Err(ConfigError::Invalid(
                "maxLookupLength must be at least 1".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::Invalid(
                "cacheCapacity must be at least 1".to_string(),
            ));
        }
        if self.max_sentence_results == 0 {
            return Err(ConfigError::Invalid(
                "maxSentenceResults must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Dictionary allow-list as a slice, for store queries
    pub fn dictionary_filter(&self) -> Option<&[i64]> {
        self.dictionary_filter.as_deref()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
