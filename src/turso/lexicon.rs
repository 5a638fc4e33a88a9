// Lexicon entry storage and exact-match queries using Turso/libsql
//
// Term lists and dictionary filters are bound as JSON arrays and expanded
// with json_each, so every query has a fixed number of parameters.

use async_trait::async_trait;
use libsql::{params, Row};
use serde::Serialize;

use super::client::{TursoClient, TursoError};
use crate::lexicon::{DictionaryEntry, EntryKey, LexiconBackend, LexiconError, Sense};

const ENTRY_COLUMNS: &str = "dictionary_id, entry_id, expression, reading, senses_json, frequency, proficiency_level, lookup_count";

const RANK_ORDER: &str = "ORDER BY frequency DESC, dictionary_id ASC, entry_id ASC";

const DICTIONARY_FILTER: &str =
    "(?2 IS NULL OR dictionary_id IN (SELECT value FROM json_each(?2)))";

/// An installed dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryInfo {
    pub id: i64,
    pub title: String,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub revision: Option<String>,
    pub imported_at: String,
}

fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, LexiconError> {
    serde_json::to_string(value).map_err(|e| LexiconError::Query(e.to_string()))
}

fn filter_param(dictionary_filter: Option<&[i64]>) -> Result<Option<String>, LexiconError> {
    dictionary_filter.map(encode_json).transpose()
}

fn read_err(e: libsql::Error) -> LexiconError {
    LexiconError::Query(e.to_string())
}

fn row_to_entry(row: &Row) -> Result<DictionaryEntry, LexiconError> {
    let senses_json: String = row.get(4).map_err(read_err)?;
    let senses: Vec<Sense> = serde_json::from_str(&senses_json)
        .map_err(|e| LexiconError::Corrupt(format!("senses_json: {}", e)))?;

    Ok(DictionaryEntry {
        dictionary_id: row.get(0).map_err(read_err)?,
        entry_id: row.get(1).map_err(read_err)?,
        expression: row.get(2).map_err(read_err)?,
        reading: row.get(3).map_err(read_err)?,
        senses,
        frequency: row.get(5).map_err(read_err)?,
        proficiency_level: row.get(6).map_err(read_err)?,
        lookup_count: row.get(7).map_err(read_err)?,
    })
}

impl TursoClient {
    /// Register a dictionary and return its record with the generated id.
    pub async fn add_dictionary(
        &self,
        title: String,
        source_language: Option<String>,
        target_language: Option<String>,
        revision: Option<String>,
    ) -> Result<DictionaryInfo, LexiconError> {
        let imported_at = chrono::Utc::now().to_rfc3339();

        self.execute(
            r#"INSERT INTO dictionary (title, source_language, target_language, revision, imported_at)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
            params![
                title.clone(),
                source_language.clone(),
                target_language.clone(),
                revision.clone(),
                imported_at.clone()
            ],
        )
        .await
        .map_err(|e| match e {
            TursoError::Constraint(_) => {
                LexiconError::Query(format!("Dictionary '{}' already exists", title))
            }
            other => other.into(),
        })?;

        let id = self.last_insert_rowid();
        crate::info!("Registered dictionary '{}' with id {}", title, id);

        Ok(DictionaryInfo {
            id,
            title,
            source_language,
            target_language,
            revision,
            imported_at,
        })
    }

    /// List installed dictionaries ordered by id.
    pub async fn list_dictionaries(&self) -> Result<Vec<DictionaryInfo>, LexiconError> {
        let mut rows = self
            .query(
                "SELECT id, title, source_language, target_language, revision, imported_at FROM dictionary ORDER BY id",
                (),
            )
            .await?;

        let mut dictionaries = Vec::new();
        while let Some(row) = rows.next().await.map_err(read_err)? {
            dictionaries.push(DictionaryInfo {
                id: row.get(0).map_err(read_err)?,
                title: row.get(1).map_err(read_err)?,
                source_language: row.get(2).map_err(read_err)?,
                target_language: row.get(3).map_err(read_err)?,
                revision: row.get(4).map_err(read_err)?,
                imported_at: row.get(5).map_err(read_err)?,
            });
        }
        Ok(dictionaries)
    }

    /// Delete a dictionary and all of its entries.
    /// Returns false if no dictionary had that id.
    pub async fn delete_dictionary(&self, id: i64) -> Result<bool, LexiconError> {
        let tx = self.transaction().await?;
        tx.execute("DELETE FROM lexicon_entry WHERE dictionary_id = ?1", params![id])
            .await
            .map_err(read_err)?;
        let deleted = tx
            .execute("DELETE FROM dictionary WHERE id = ?1", params![id])
            .await
            .map_err(read_err)?;
        tx.commit().await.map_err(read_err)?;

        Ok(deleted > 0)
    }

    /// Insert or replace entries in a single transaction.
    ///
    /// Existing lookup counters are preserved for replaced entries.
    pub async fn insert_entries(&self, entries: &[DictionaryEntry]) -> Result<usize, LexiconError> {
        let tx = self.transaction().await?;

        for entry in entries {
            let senses_json = encode_json(&entry.senses)?;
            tx.execute(
                r#"INSERT INTO lexicon_entry
                   (dictionary_id, entry_id, expression, reading, senses_json, frequency, proficiency_level, lookup_count)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                   ON CONFLICT (dictionary_id, entry_id) DO UPDATE SET
                       expression = excluded.expression,
                       reading = excluded.reading,
                       senses_json = excluded.senses_json,
                       frequency = excluded.frequency,
                       proficiency_level = excluded.proficiency_level"#,
                params![
                    entry.dictionary_id,
                    entry.entry_id,
                    entry.expression.clone(),
                    entry.reading.clone(),
                    senses_json,
                    entry.frequency,
                    entry.proficiency_level.clone(),
                    entry.lookup_count
                ],
            )
            .await
            .map_err(read_err)?;
        }

        tx.commit().await.map_err(read_err)?;
        crate::debug!("Inserted {} lexicon entries", entries.len());
        Ok(entries.len())
    }

    /// Fetch a single entry by key.
    pub async fn get_entry(&self, key: EntryKey) -> Result<Option<DictionaryEntry>, LexiconError> {
        let mut rows = self
            .query(
                &format!(
                    "SELECT {} FROM lexicon_entry WHERE dictionary_id = ?1 AND entry_id = ?2",
                    ENTRY_COLUMNS
                ),
                params![key.dictionary_id, key.entry_id],
            )
            .await?;

        match rows.next().await.map_err(read_err)? {
            Some(row) => Ok(Some(row_to_entry(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl LexiconBackend for TursoClient {
    async fn find_exact(
        &self,
        term: &str,
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Option<DictionaryEntry>, LexiconError> {
        let sql = format!(
            "SELECT {} FROM lexicon_entry WHERE (expression = ?1 OR reading = ?1) AND {} {} LIMIT 1",
            ENTRY_COLUMNS, DICTIONARY_FILTER, RANK_ORDER
        );

        let mut rows = self
            .query(&sql, params![term.to_string(), filter_param(dictionary_filter)?])
            .await?;

        match rows.next().await.map_err(read_err)? {
            Some(row) => Ok(Some(row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_bulk(
        &self,
        terms: &[String],
        dictionary_filter: Option<&[i64]>,
    ) -> Result<Vec<DictionaryEntry>, LexiconError> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {} FROM lexicon_entry
             WHERE (expression IN (SELECT value FROM json_each(?1))
                    OR reading IN (SELECT value FROM json_each(?1)))
               AND {} {}",
            ENTRY_COLUMNS, DICTIONARY_FILTER, RANK_ORDER
        );

        let mut rows = self
            .query(
                &sql,
                params![encode_json(terms)?, filter_param(dictionary_filter)?],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await.map_err(read_err)? {
            entries.push(row_to_entry(&row)?);
        }

        crate::debug!(
            "Bulk lexicon query for {} terms returned {} entries",
            terms.len(),
            entries.len()
        );
        Ok(entries)
    }

    async fn record_lookup(&self, key: EntryKey) -> Result<(), LexiconError> {
        self.execute(
            "UPDATE lexicon_entry SET lookup_count = lookup_count + 1 WHERE dictionary_id = ?1 AND entry_id = ?2",
            params![key.dictionary_id, key.entry_id],
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "lexicon_test.rs"]
mod tests;
