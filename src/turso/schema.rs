// Lexicon database schema and migration system

use super::client::{TursoClient, TursoError};

/// Current schema version
const SCHEMA_VERSION: i32 = 2;

/// Index for per-dictionary deletes and filtered queries, added in version 2
const CREATE_DICTIONARY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_lexicon_entry_dictionary ON lexicon_entry(dictionary_id)";

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // Installed dictionaries
    r#"CREATE TABLE IF NOT EXISTS dictionary (
        id INTEGER PRIMARY KEY,
        title TEXT UNIQUE NOT NULL,
        source_language TEXT,
        target_language TEXT,
        revision TEXT,
        imported_at TEXT NOT NULL
    )"#,
    // Entries, keyed by (dictionary, entry); senses stored as JSON
    r#"CREATE TABLE IF NOT EXISTS lexicon_entry (
        dictionary_id INTEGER NOT NULL,
        entry_id INTEGER NOT NULL,
        expression TEXT,
        reading TEXT NOT NULL,
        senses_json TEXT NOT NULL,
        frequency INTEGER NOT NULL DEFAULT 0,
        proficiency_level TEXT,
        lookup_count INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY (dictionary_id, entry_id),
        FOREIGN KEY (dictionary_id) REFERENCES dictionary(id) ON DELETE CASCADE
    )"#,
    // Exact-match lookups go through one of these two indexes
    r#"CREATE INDEX IF NOT EXISTS idx_lexicon_entry_expression ON lexicon_entry(expression)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_lexicon_entry_reading ON lexicon_entry(reading)"#,
    CREATE_DICTIONARY_INDEX,
];

/// Initialize the database schema.
///
/// Creates all tables if they don't exist and runs any pending migrations.
/// Call once after the TursoClient is created, before any lookup.
pub async fn initialize_schema(client: &TursoClient) -> Result<(), TursoError> {
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        crate::info!("Initializing lexicon database schema (version {})", SCHEMA_VERSION);

        for statement in CREATE_TABLES {
            client.execute(statement, ()).await?;
        }
        set_schema_version(client, SCHEMA_VERSION).await?;

        crate::info!("Lexicon database schema initialized successfully");
    } else if current_version < SCHEMA_VERSION {
        crate::info!(
            "Migrating lexicon database from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );
        run_migrations(client, current_version, SCHEMA_VERSION).await?;
        crate::info!("Lexicon database migration complete");
    } else {
        crate::debug!("Lexicon database schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version, 0 for a fresh database.
pub(crate) async fn get_schema_version(client: &TursoClient) -> Result<i32, TursoError> {
    let mut rows = client
        .query("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1", ())
        .await?;

    match rows.next().await.map_err(|e| TursoError::Query(e.to_string()))? {
        Some(row) => {
            let version: i32 = row.get(0).map_err(|e| TursoError::Query(e.to_string()))?;
            Ok(version)
        }
        None => Ok(0),
    }
}

async fn set_schema_version(client: &TursoClient, version: i32) -> Result<(), TursoError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

/// Run migrations from one version to another, one version at a time.
async fn run_migrations(
    client: &TursoClient,
    from_version: i32,
    to_version: i32,
) -> Result<(), TursoError> {
    for version in (from_version + 1)..=to_version {
        match version {
            2 => migrate_v1_to_v2(client).await?,
            _ => {
                crate::debug!("No migration needed for version {}", version);
            }
        }
        set_schema_version(client, version).await?;
    }
    Ok(())
}

/// Version 2: index entries by dictionary
async fn migrate_v1_to_v2(client: &TursoClient) -> Result<(), TursoError> {
    crate::debug!("Adding lexicon_entry dictionary index");
    client.execute(CREATE_DICTIONARY_INDEX, ()).await?;
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
