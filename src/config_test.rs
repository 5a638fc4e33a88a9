use super::*;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = LookupConfig::default();
    assert_eq!(config.max_lookup_length, 25);
    assert_eq!(config.cache_capacity, 500);
    assert!(config.record_lookups);
    assert_eq!(config.dictionary_filter(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = LookupConfig::load(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, LookupConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{"cacheCapacity": 50, "dictionaryFilter": [2, 3]}"#).unwrap();

    let config = LookupConfig::load(&path).unwrap();

    assert_eq!(config.cache_capacity, 50);
    assert_eq!(config.dictionary_filter(), Some(&[2, 3][..]));
    assert_eq!(config.max_lookup_length, 25);
    assert!(config.record_lookups);
}

#[test]
fn test_malformed_file_is_a_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(
        LookupConfig::load(&path),
        Err(ConfigError::LoadError(_))
    ));
}

#[test]
fn test_zero_values_are_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{"maxLookupLength": 0}"#).unwrap();

    match LookupConfig::load(&path) {
        Err(ConfigError::Invalid(msg)) => assert!(msg.contains("maxLookupLength")),
        other => panic!("Expected Invalid, got {:?}", other),
    }

    let config = LookupConfig {
        cache_capacity: 0,
        ..LookupConfig::default()
    };
    assert!(config.validate().is_err());
}
