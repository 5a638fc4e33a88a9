//! Deinflection: mapping an inflected surface form back to candidate
//! dictionary forms.
//!
//! Two engines are provided:
//! - [`SuffixDeinflector`]: drives a static suffix rule table (Japanese).
//! - [`SurfaceDeinflector`]: the degenerate form used for space-delimited
//!   languages (original, lowercased, trimmed).
//!
//! Both are pure and deterministic.

mod japanese;
mod suffix;

use serde::Serialize;
use std::collections::HashSet;

pub use japanese::JAPANESE_RULES;
pub use suffix::{IdentityDeinflector, SuffixDeinflector, SurfaceDeinflector};

/// Conjugation family a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbClass {
    Ichidan,
    Godan,
    IAdjective,
    /// Irregular する
    Suru,
    /// Irregular 来る / くる
    Kuru,
}

/// A single suffix transformation in a static rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeinflectionRule {
    /// Suffix as it appears in the conjugated surface form
    pub inflected_suffix: &'static str,
    /// Suffix that replaces it in the dictionary form
    pub dictionary_suffix: &'static str,
    /// Human-readable label, e.g. "polite-past"
    pub rule_name: &'static str,
    pub verb_class: VerbClass,
}

/// Build a rule in a `const` table
pub(crate) const fn rule(
    inflected_suffix: &'static str,
    dictionary_suffix: &'static str,
    rule_name: &'static str,
    verb_class: VerbClass,
) -> DeinflectionRule {
    DeinflectionRule {
        inflected_suffix,
        dictionary_suffix,
        rule_name,
        verb_class,
    }
}

/// One candidate dictionary form produced from a surface form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeinflectionResult {
    /// Candidate dictionary-form term
    pub term: String,
    /// Rules applied to reach `term`, empty for the identity transform
    pub rules: Vec<String>,
}

impl DeinflectionResult {
    /// The identity candidate: the term itself with no rules applied
    pub fn identity(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            rules: Vec::new(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Maps a surface form to an ordered list of candidate dictionary forms.
///
/// Implementations must put the identity candidate first for any non-empty
/// input, never emit an empty term, and never emit two results with the
/// same term.
pub trait Deinflector: Send + Sync {
    fn deinflect(&self, surface: &str) -> Vec<DeinflectionResult>;
}

/// Drop results whose term was already seen, keeping first-seen order.
pub(crate) fn dedup_by_term(results: Vec<DeinflectionResult>) -> Vec<DeinflectionResult> {
    let mut seen = HashSet::with_capacity(results.len());
    results
        .into_iter()
        .filter(|result| seen.insert(result.term.clone()))
        .collect()
}
