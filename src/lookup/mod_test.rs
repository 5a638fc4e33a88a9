use super::*;
use crate::test_utils::word;

fn result(rules: &[&str]) -> LookupResult {
    LookupResult {
        entry: word(1, "食べる", "たべる"),
        matched_text: "食べた".to_string(),
        match_length: 3,
        deinflected_form: "食べる".to_string(),
        applied_rules: rules.iter().map(|r| r.to_string()).collect(),
        source_offset: 4,
    }
}

#[test]
fn test_was_deinflected_follows_rules() {
    assert!(result(&["past"]).was_deinflected());
    assert!(!result(&[]).was_deinflected());
}

#[test]
fn test_result_serializes_camel_case() {
    let json = serde_json::to_value(result(&["past"])).unwrap();

    assert_eq!(json["matchedText"], "食べた");
    assert_eq!(json["matchLength"], 3);
    assert_eq!(json["deinflectedForm"], "食べる");
    assert_eq!(json["appliedRules"][0], "past");
    assert_eq!(json["sourceOffset"], 4);
    assert_eq!(json["entry"]["dictionaryId"], 1);
}

#[test]
fn test_store_error_converts_and_displays_unchanged() {
    let error: LookupError = LexiconError::Unavailable("disk gone".to_string()).into();

    assert_eq!(
        error,
        LookupError::Store(LexiconError::Unavailable("disk gone".to_string()))
    );
    assert_eq!(error.to_string(), "Lexicon store unavailable: disk gone");
}

#[test]
fn test_attempt_into_result_carries_candidate() {
    let attempt = Attempt {
        matched_text: "飲んだ".to_string(),
        match_length: 3,
        source_offset: 2,
        candidates: Vec::new(),
    };
    let candidate = DeinflectionResult {
        term: "飲む".to_string(),
        rules: vec!["past".to_string()],
    };

    let result = attempt.into_result(candidate, word(2, "飲む", "のむ"));

    assert_eq!(result.deinflected_form, "飲む");
    assert_eq!(result.applied_rules, vec!["past".to_string()]);
    assert_eq!(result.source_offset, 2);
    assert_eq!(result.entry.entry_id, 2);
}
