// Sentence scanner - repeated lookups across a text producing
// non-overlapping matches

use super::{LookupEngine, LookupError, LookupResult};
use crate::language::Language;

/// Scans text left to right, collecting one match per matched span.
///
/// Stateless between calls.
#[derive(Debug, Clone, Copy)]
pub struct SentenceScanner<'a> {
    engine: &'a LookupEngine,
}

impl<'a> SentenceScanner<'a> {
    pub fn new(engine: &'a LookupEngine) -> Self {
        Self { engine }
    }

    /// Collect up to `max_results` matches (the configured cap if `None`).
    ///
    /// Characters outside the language's script are skipped. Each lookup
    /// reads the text from the cursor on. After a match the cursor moves
    /// past it; after a miss it moves one character.
    pub async fn scan(
        &self,
        text: &str,
        language: Language,
        max_results: Option<usize>,
    ) -> Result<Vec<LookupResult>, LookupError> {
        let max_results = max_results.unwrap_or(self.engine.config().max_sentence_results);
        let chars: Vec<char> = text.chars().collect();
        let mut results = Vec::new();
        let mut offset = 0;

        while offset < chars.len() && results.len() < max_results {
            let Some(start) = next_target(&chars, offset, language) else {
                break;
            };

            match self.engine.scan_at(text, start, language).await? {
                Some(result) => {
                    offset = advance_past(start, &result);
                    results.push(result);
                }
                None => offset = start + 1,
            }
        }

        crate::debug!("Sentence scan found {} matches", results.len());
        Ok(results)
    }
}

/// First position at or after `from` holding a character of the language's script
pub(crate) fn next_target(chars: &[char], from: usize, language: Language) -> Option<usize> {
    chars
        .iter()
        .enumerate()
        .skip(from)
        .find(|&(_, &c)| language.is_target_char(c))
        .map(|(index, _)| index)
}

/// Cursor position after a match found while scanning from `start`
pub(crate) fn advance_past(start: usize, result: &LookupResult) -> usize {
    (result.source_offset + result.match_length).max(start + 1)
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod tests;
