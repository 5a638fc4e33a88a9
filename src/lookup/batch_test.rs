use super::*;
use crate::config::LookupConfig;
use crate::lookup::SentenceScanner;
use crate::test_utils::{engine_with, engine_with_config, entry, word};

fn sample() -> Vec<DictionaryEntry> {
    vec![
        word(1, "食べる", "たべる"),
        word(2, "飲む", "のむ"),
        word(3, "食べ物", "たべもの"),
        word(4, "行く", "いく"),
        entry(1, 5, Some("生"), "なま", 10),
        entry(2, 1, Some("生"), "せい", 50),
        entry(2, 2, Some("生きる"), "いきる", 5),
    ]
}

fn without_counters(results: Vec<LookupResult>) -> Vec<LookupResult> {
    results
        .into_iter()
        .map(|mut result| {
            result.entry.lookup_count = 0;
            result
        })
        .collect()
}

#[tokio::test]
async fn test_batch_selects_same_match_as_engine() {
    let texts = [
        "食べました",
        "食べ物を食べる",
        "飲んだ後",
        "生きている",
        "生ビール",
        "なまで",
        "行ってきます",
        "走る",
    ];

    let (engine, _) = engine_with(sample());
    let (batched_engine, _) = engine_with(sample());
    let batch = BatchLookupOptimizer::new(&batched_engine);

    for text in texts {
        let expected = engine.lookup(text, Language::Japanese).await.unwrap();
        let actual = batch.lookup_at(text, 0, Language::Japanese).await.unwrap();
        assert_eq!(
            expected.map(|r| without_counters(vec![r])),
            actual.map(|r| without_counters(vec![r])),
            "diverged on '{}'",
            text
        );
    }
}

#[tokio::test]
async fn test_batch_uses_one_bulk_query_per_window() {
    let (engine, backend) = engine_with(sample());
    let batch = BatchLookupOptimizer::new(&engine);

    let result = batch
        .lookup_at("食べました", 0, Language::Japanese)
        .await
        .unwrap()
        .expect("should match");

    assert_eq!(result.deinflected_form, "食べる");
    assert_eq!(result.applied_rules, vec!["polite-past".to_string()]);
    assert_eq!(backend.bulk_calls(), 1);
    assert_eq!(backend.exact_calls(), 0);
}

#[tokio::test]
async fn test_batch_bulk_matches_engine_bulk() {
    let terms: Vec<String> = ["飲んだ", "走る", "食べました", "生"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let (engine, per_call_backend) = engine_with(sample());
    let (batched_engine, batched_backend) = engine_with(sample());
    let batch = BatchLookupOptimizer::new(&batched_engine);

    let expected = engine.lookup_bulk(&terms, Language::Japanese).await.unwrap();
    let actual = batch.lookup_bulk(&terms, Language::Japanese).await.unwrap();

    assert_eq!(without_counters(expected), without_counters(actual));
    assert_eq!(batched_backend.bulk_calls(), 1);
    assert!(per_call_backend.exact_calls() > batched_backend.bulk_calls());
}

#[tokio::test]
async fn test_batch_scan_matches_scanner() {
    let text = "今日は食べる。明日は飲む。生きている";

    let (engine, _) = engine_with(sample());
    let (batched_engine, _) = engine_with(sample());

    let expected = SentenceScanner::new(&engine)
        .scan(text, Language::Japanese, None)
        .await
        .unwrap();
    let actual = BatchLookupOptimizer::new(&batched_engine)
        .scan(text, Language::Japanese, None)
        .await
        .unwrap();

    assert_eq!(expected.len(), 3);
    assert_eq!(without_counters(expected), without_counters(actual));
}

#[tokio::test]
async fn test_batch_respects_dictionary_filter() {
    let config = LookupConfig {
        dictionary_filter: Some(vec![1]),
        ..LookupConfig::default()
    };
    let (engine, _) = engine_with_config(sample(), config);
    let batch = BatchLookupOptimizer::new(&engine);

    let result = batch
        .lookup_at("生", 0, Language::Japanese)
        .await
        .unwrap()
        .expect("should match");
    assert_eq!(result.entry.key().dictionary_id, 1);
}

#[tokio::test]
async fn test_batch_space_delimited() {
    let (engine, backend) = engine_with(vec![entry(1, 1, Some("world"), "world", 0)]);
    let batch = BatchLookupOptimizer::new(&engine);

    let result = batch
        .lookup_at("Hello, World!", 9, Language::English)
        .await
        .unwrap()
        .expect("should match");

    assert_eq!(result.matched_text, "World");
    assert_eq!(result.source_offset, 7);
    assert_eq!(backend.bulk_calls(), 1);
}

#[tokio::test]
async fn test_batch_blank_text_skips_store() {
    let (engine, backend) = engine_with(sample());
    let batch = BatchLookupOptimizer::new(&engine);

    assert!(batch.lookup_at("  ", 0, Language::Japanese).await.unwrap().is_none());
    assert_eq!(backend.bulk_calls(), 0);
}

#[tokio::test]
async fn test_batch_propagates_store_failure() {
    let (engine, backend) = engine_with(sample());
    backend.set_failing(true);
    let batch = BatchLookupOptimizer::new(&engine);

    let result = batch.lookup_at("食べる", 0, Language::Japanese).await;
    assert!(matches!(result, Err(LookupError::Store(_))));
}

#[tokio::test]
async fn test_batch_scan_space_delimited_matches_scanner() {
    let entries = vec![
        entry(1, 1, Some("happy"), "happy", 0),
        entry(1, 2, Some("days"), "days", 0),
    ];
    let text = "Unhappy days, happy days";

    let (engine, _) = engine_with(entries.clone());
    let (batched_engine, _) = engine_with(entries);

    let expected = SentenceScanner::new(&engine)
        .scan(text, Language::English, None)
        .await
        .unwrap();
    let actual = BatchLookupOptimizer::new(&batched_engine)
        .scan(text, Language::English, None)
        .await
        .unwrap();

    let spans: Vec<(usize, usize)> = actual
        .iter()
        .map(|r| (r.source_offset, r.match_length))
        .collect();
    assert_eq!(spans, vec![(2, 5), (8, 4), (14, 5), (20, 4)]);
    assert_eq!(without_counters(expected), without_counters(actual));
}
