// Deinflection engines: suffix rule tables, surface-form variants, identity

use super::{dedup_by_term, DeinflectionResult, DeinflectionRule, Deinflector};

/// Rule-table engine for conjugating languages.
///
/// For every rule whose inflected suffix ends the surface form, the suffix is
/// swapped for the rule's dictionary suffix. The identity candidate always
/// comes first, followed by rule candidates in table order.
#[derive(Debug, Clone, Copy)]
pub struct SuffixDeinflector {
    rules: &'static [DeinflectionRule],
}

impl SuffixDeinflector {
    pub const fn new(rules: &'static [DeinflectionRule]) -> Self {
        Self { rules }
    }

    /// Engine over the built-in Japanese table
    pub const fn japanese() -> Self {
        Self::new(super::JAPANESE_RULES)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Deinflector for SuffixDeinflector {
    fn deinflect(&self, surface: &str) -> Vec<DeinflectionResult> {
        if surface.is_empty() {
            return Vec::new();
        }

        let mut results = vec![DeinflectionResult::identity(surface)];

        for rule in self.rules {
            let Some(stem) = surface.strip_suffix(rule.inflected_suffix) else {
                continue;
            };
            let candidate = format!("{}{}", stem, rule.dictionary_suffix);
            if candidate.is_empty() {
                continue;
            }
            results.push(DeinflectionResult {
                term: candidate,
                rules: vec![rule.rule_name.to_string()],
            });
        }

        dedup_by_term(results)
    }
}

/// Degenerate engine for space-delimited languages.
///
/// Produces at most three candidates, in priority order: the original form,
/// its lowercase form, and its whitespace-trimmed form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceDeinflector;

impl Deinflector for SurfaceDeinflector {
    fn deinflect(&self, surface: &str) -> Vec<DeinflectionResult> {
        if surface.is_empty() {
            return Vec::new();
        }

        let variants = [
            surface.to_string(),
            surface.to_lowercase(),
            surface.trim().to_string(),
        ];

        dedup_by_term(
            variants
                .into_iter()
                .filter(|variant| !variant.is_empty())
                .map(DeinflectionResult::identity)
                .collect(),
        )
    }
}

/// Engine that only ever yields the surface form itself.
/// Used for unsegmented scripts without conjugation (Chinese).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityDeinflector;

impl Deinflector for IdentityDeinflector {
    fn deinflect(&self, surface: &str) -> Vec<DeinflectionResult> {
        if surface.is_empty() {
            return Vec::new();
        }
        vec![DeinflectionResult::identity(surface)]
    }
}

#[cfg(test)]
#[path = "suffix_test.rs"]
mod tests;
