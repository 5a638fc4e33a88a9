use super::*;

#[test]
fn test_extract_word_inside_second_word() {
    let extractor = WordBoundaryExtractor::new();
    assert_eq!(extractor.extract_word_at("hello world", 7), Some("world".to_string()));
    assert_eq!(extractor.find_boundaries("hello world", 7), (6, 11));
}

#[test]
fn test_comma_is_a_separator() {
    let extractor = WordBoundaryExtractor::new();
    assert_eq!(extractor.extract_word_at("hello, world!", 0), Some("hello".to_string()));
    assert_eq!(extractor.extract_word_at("hello, world!", 8), Some("world".to_string()));
}

#[test]
fn test_position_on_separator_is_empty_span() {
    let extractor = WordBoundaryExtractor::new();
    assert_eq!(extractor.find_boundaries("hello world", 5), (5, 5));
    assert_eq!(extractor.extract_word_at("hello world", 5), None);
}

#[test]
fn test_out_of_range_and_empty_input() {
    let extractor = WordBoundaryExtractor::new();
    assert_eq!(extractor.find_boundaries("", 0), (0, 0));
    assert_eq!(extractor.find_boundaries("hello", 5), (5, 5));
    assert_eq!(extractor.find_boundaries("hello", 42), (42, 42));
    assert_eq!(extractor.extract_word_at("hello", 42), None);
}

#[test]
fn test_inverted_punctuation() {
    let extractor = WordBoundaryExtractor::new();
    let text = "¿Dónde está?";
    assert_eq!(extractor.extract_word_at(text, 1), Some("Dónde".to_string()));
    assert_eq!(extractor.extract_span_at(text, 9), Some((7, "está".to_string())));
    assert_eq!(extractor.extract_word_at("¡Hola!", 0), None);
}

#[test]
fn test_positions_are_characters_not_bytes() {
    let extractor = WordBoundaryExtractor::new();
    // "señor" has a two-byte character; position 8 is inside "mañana"
    let text = "señor mañana";
    assert_eq!(extractor.find_boundaries(text, 8), (6, 12));
    assert_eq!(extractor.extract_word_at(text, 8), Some("mañana".to_string()));
}

#[test]
fn test_brackets_quotes_dashes_and_slash() {
    let extractor = WordBoundaryExtractor::new();
    assert_eq!(extractor.extract_word_at("(casa)", 2), Some("casa".to_string()));
    assert_eq!(extractor.extract_word_at("«perro»", 3), Some("perro".to_string()));
    assert_eq!(extractor.extract_word_at("bien—mal", 6), Some("mal".to_string()));
    assert_eq!(extractor.extract_word_at("sí/no", 0), Some("sí".to_string()));
}

#[test]
fn test_custom_separators() {
    let extractor = WordBoundaryExtractor::with_separators(&['|']);
    assert_eq!(extractor.extract_word_at("a b|c", 0), Some("a b".to_string()));
}
