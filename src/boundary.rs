// Word boundary extraction for space-delimited languages.
// Positions are character offsets, not byte offsets.

/// Characters that end a word: whitespace, sentence and clause punctuation
/// (including Spanish inverted marks), brackets, quotes, dashes, slash.
pub const SEPARATORS: &[char] = &[
    ' ', '\t', '\n', '\r', '\u{00A0}', '\u{3000}', // whitespace
    '.', ',', ';', ':', '!', '?', '¡', '¿', '…', // sentence/clause punctuation
    '。', '、', '！', '？', // CJK punctuation
    '(', ')', '[', ']', '{', '}', '<', '>', // brackets
    '"', '\'', '«', '»', '“', '”', '‘', '’', '「', '」', '『', '』', // quotes
    '-', '–', '—', // dashes
    '/', '\\',
];

/// Finds the word span around a character position
#[derive(Debug, Clone, Copy)]
pub struct WordBoundaryExtractor {
    separators: &'static [char],
}

impl Default for WordBoundaryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl WordBoundaryExtractor {
    /// Extractor over the default separator set
    pub const fn new() -> Self {
        Self {
            separators: SEPARATORS,
        }
    }

    /// Extractor with a custom separator set
    pub const fn with_separators(separators: &'static [char]) -> Self {
        Self { separators }
    }

    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Find `(start, end)` of the word containing `position`.
    ///
    /// Returns the empty span `(position, position)` when the text is empty,
    /// the position is out of range, or the position sits on a separator.
    pub fn find_boundaries(&self, text: &str, position: usize) -> (usize, usize) {
        let chars: Vec<char> = text.chars().collect();
        self.boundaries_in(&chars, position)
    }

    fn boundaries_in(&self, chars: &[char], position: usize) -> (usize, usize) {
        if chars.is_empty() || position >= chars.len() || self.is_separator(chars[position]) {
            return (position, position);
        }

        let mut start = position;
        while start > 0 && !self.is_separator(chars[start - 1]) {
            start -= 1;
        }

        let mut end = position;
        while end < chars.len() && !self.is_separator(chars[end]) {
            end += 1;
        }

        (start, end)
    }

    /// Extract the trimmed word at `position`, if any
    pub fn extract_word_at(&self, text: &str, position: usize) -> Option<String> {
        self.extract_span_at(text, position).map(|(_, word)| word)
    }

    /// Extract the trimmed word at `position` together with its starting
    /// character offset.
    pub fn extract_span_at(&self, text: &str, position: usize) -> Option<(usize, String)> {
        let chars: Vec<char> = text.chars().collect();
        let (start, end) = self.boundaries_in(&chars, position);
        if start >= end {
            return None;
        }

        let raw: String = chars[start..end].iter().collect();
        let leading = raw.chars().take_while(|c| c.is_whitespace()).count();
        let word = raw.trim();
        if word.is_empty() {
            return None;
        }

        Some((start + leading, word.to_string()))
    }
}

#[cfg(test)]
#[path = "boundary_test.rs"]
mod tests;
