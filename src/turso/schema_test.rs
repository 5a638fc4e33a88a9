use super::*;
use tempfile::TempDir;

async fn open_client() -> (TursoClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let client = TursoClient::new(temp_dir.path().to_path_buf())
        .await
        .expect("Failed to create client");
    (client, temp_dir)
}

#[tokio::test]
async fn test_initialize_creates_tables_and_version() {
    let (client, _temp) = open_client().await;

    initialize_schema(&client).await.expect("schema init failed");

    assert_eq!(get_schema_version(&client).await.unwrap(), SCHEMA_VERSION);

    let mut rows = client
        .query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='lexicon_entry'",
            (),
        )
        .await
        .unwrap();
    assert!(rows.next().await.unwrap().is_some());
}

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let (client, _temp) = open_client().await;

    initialize_schema(&client).await.expect("first init failed");
    initialize_schema(&client).await.expect("second init failed");

    assert_eq!(get_schema_version(&client).await.unwrap(), SCHEMA_VERSION);
}

#[tokio::test]
async fn test_lookup_indexes_exist() {
    let (client, _temp) = open_client().await;
    initialize_schema(&client).await.unwrap();

    for index in ["idx_lexicon_entry_expression", "idx_lexicon_entry_reading"] {
        let mut rows = client
            .query(
                "SELECT name FROM sqlite_master WHERE type='index' AND name=?1",
                libsql::params![index],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some(), "missing index {}", index);
    }
}

async fn index_exists(client: &TursoClient, index: &str) -> bool {
    let mut rows = client
        .query(
            "SELECT name FROM sqlite_master WHERE type='index' AND name=?1",
            libsql::params![index],
        )
        .await
        .unwrap();
    rows.next().await.unwrap().is_some()
}

#[tokio::test]
async fn test_fresh_schema_has_dictionary_index() {
    let (client, _temp) = open_client().await;
    initialize_schema(&client).await.unwrap();

    assert!(index_exists(&client, "idx_lexicon_entry_dictionary").await);
}

#[tokio::test]
async fn test_migrates_version_1_database() {
    let (client, _temp) = open_client().await;

    // Lay down a version 1 database: every table, without the v2 index
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await
        .unwrap();
    for statement in CREATE_TABLES.iter().filter(|s| **s != CREATE_DICTIONARY_INDEX) {
        client.execute(statement, ()).await.unwrap();
    }
    set_schema_version(&client, 1).await.unwrap();
    assert!(!index_exists(&client, "idx_lexicon_entry_dictionary").await);

    initialize_schema(&client).await.expect("migration failed");

    assert_eq!(get_schema_version(&client).await.unwrap(), 2);
    assert!(index_exists(&client, "idx_lexicon_entry_dictionary").await);
}
