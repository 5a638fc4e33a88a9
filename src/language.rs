// Language selection: maps an ISO 639-1 style code to a lookup strategy

use serde::Serialize;

use crate::deinflect::{Deinflector, IdentityDeinflector, SuffixDeinflector, SurfaceDeinflector};

/// How the orchestrator walks text for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Longest-prefix search with suffix-table deinflection (Japanese)
    Conjugating,
    /// Longest-prefix search with the identity form only (Chinese)
    Unsegmented,
    /// Word extraction around a position, then surface variants
    SpaceDelimited,
}

/// Source language of the text being looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Japanese,
    Chinese,
    Korean,
    Spanish,
    English,
    /// Any code without a dedicated strategy
    Other,
}

static SURFACE: SurfaceDeinflector = SurfaceDeinflector;
static IDENTITY: IdentityDeinflector = IdentityDeinflector;
static JAPANESE: SuffixDeinflector = SuffixDeinflector::japanese();

impl Language {
    /// Parse a language tag. Accepts bare codes ("ja") and region-qualified
    /// tags ("ja-JP", "es_CO"), case-insensitive. Unknown codes map to
    /// [`Language::Other`] rather than failing.
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "ja" | "jpn" => Language::Japanese,
            "zh" | "zho" | "chi" => Language::Chinese,
            "ko" | "kor" => Language::Korean,
            "es" | "spa" => Language::Spanish,
            "en" | "eng" => Language::English,
            _ => {
                crate::trace!(
                    "No dedicated strategy for language '{}', using space-delimited lookup",
                    code
                );
                Language::Other
            }
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Language::Japanese => Strategy::Conjugating,
            Language::Chinese => Strategy::Unsegmented,
            Language::Korean | Language::Spanish | Language::English | Language::Other => {
                Strategy::SpaceDelimited
            }
        }
    }

    /// Deinflection engine used for this language
    pub fn deinflector(self) -> &'static dyn Deinflector {
        match self.strategy() {
            Strategy::Conjugating => &JAPANESE,
            Strategy::Unsegmented => &IDENTITY,
            Strategy::SpaceDelimited => &SURFACE,
        }
    }

    /// Whether `c` belongs to the script this language is written in.
    /// The sentence scanner skips characters for which this is false.
    pub fn is_target_char(self, c: char) -> bool {
        match self {
            Language::Japanese => is_kana(c) || is_han(c),
            Language::Chinese => is_han(c),
            Language::Korean => is_hangul(c),
            Language::Spanish | Language::English | Language::Other => c.is_alphabetic(),
        }
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Language::from_code(code)
    }
}

fn is_kana(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{309F}' // Hiragana
        | '\u{30A0}'..='\u{30FF}' // Katakana, including ー
        | '\u{31F0}'..='\u{31FF}' // Katakana phonetic extensions
        | '\u{FF66}'..='\u{FF9F}' // Halfwidth katakana
    )
}

fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{3005}' // 々
        | '\u{3007}' // 〇
    )
}

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7AF}'
        | '\u{1100}'..='\u{11FF}'
        | '\u{3130}'..='\u{318F}'
    )
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
