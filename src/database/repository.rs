/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for the translation store,
 * abstracting away the SQL details and providing type-safe access.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{OptionalExtension, params};

use super::connection::DatabaseConnection;
use super::models::TranslationRecord;

/// Columns selected for every record read, in `parse_record` order.
const RECORD_COLUMNS: &str = "id, source_language, target_language, source_word, \
                              direct_translation, explanation, created_at, updated_at";

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// Find the stored record for an exact (word, source, target) triple
    ///
    /// The word is matched exactly as submitted; no normalization.
    pub async fn find_exact(
        &self,
        source_word: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<Option<TranslationRecord>> {
        let source_word = source_word.to_string();
        let source_language = source_language.to_string();
        let target_language = target_language.to_string();

        self.db
            .execute_async(move |conn| {
                let result = conn
                    .query_row(
                        &format!(
                            "SELECT {RECORD_COLUMNS} FROM words
                             WHERE source_word = ?1
                               AND source_language = ?2
                               AND target_language = ?3
                             LIMIT 1"
                        ),
                        params![source_word, source_language, target_language],
                        parse_record,
                    )
                    .optional()?;

                Ok(result)
            })
            .await
    }

    /// Insert a resolved lookup, or fetch the existing row on conflict
    ///
    /// The lookup key is unique; when a concurrent request already inserted
    /// the same triple, the winning row is read back and returned instead of
    /// surfacing a conflict error.
    pub async fn insert(
        &self,
        source_language: &str,
        target_language: &str,
        source_word: &str,
        direct_translation: &str,
        explanation: &str,
    ) -> Result<TranslationRecord> {
        let source_language = source_language.to_string();
        let target_language = target_language.to_string();
        let source_word = source_word.to_string();
        let direct_translation = direct_translation.to_string();
        let explanation = explanation.to_string();
        let now = chrono::Utc::now().to_rfc3339();

        self.db
            .execute_async(move |conn| {
                let inserted = conn.execute(
                    "INSERT INTO words (
                         source_language, target_language, source_word,
                         direct_translation, explanation, created_at, updated_at
                     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                     ON CONFLICT(source_word, source_language, target_language) DO NOTHING",
                    params![
                        source_language,
                        target_language,
                        source_word,
                        direct_translation,
                        explanation,
                        now,
                        now,
                    ],
                )?;

                if inserted == 1 {
                    let id = conn.last_insert_rowid();
                    let record = conn.query_row(
                        &format!("SELECT {RECORD_COLUMNS} FROM words WHERE id = ?1"),
                        [id],
                        parse_record,
                    )?;
                    return Ok(record);
                }

                // Someone else resolved this triple first; return their row.
                debug!("Insert conflict for '{}', returning existing row", source_word);
                conn.query_row(
                    &format!(
                        "SELECT {RECORD_COLUMNS} FROM words
                         WHERE source_word = ?1
                           AND source_language = ?2
                           AND target_language = ?3
                         LIMIT 1"
                    ),
                    params![source_word, source_language, target_language],
                    parse_record,
                )
                .optional()?
                .ok_or_else(|| anyhow::anyhow!("Conflicting row disappeared during insert"))
            })
            .await
    }

    /// Remove a record by id and return it, or None when absent
    pub async fn delete_by_id(&self, id: i64) -> Result<Option<TranslationRecord>> {
        self.db
            .execute_async(move |conn| {
                let record = conn
                    .query_row(
                        &format!("SELECT {RECORD_COLUMNS} FROM words WHERE id = ?1"),
                        [id],
                        parse_record,
                    )
                    .optional()?;

                if record.is_some() {
                    conn.execute("DELETE FROM words WHERE id = ?1", [id])?;
                }

                Ok(record)
            })
            .await
    }

    /// Total number of stored records
    pub async fn count_records(&self) -> Result<i64> {
        self.db
            .execute_async(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
    }
}

/// Parse a full record row in `RECORD_COLUMNS` order
fn parse_record(row: &rusqlite::Row) -> rusqlite::Result<TranslationRecord> {
    Ok(TranslationRecord {
        id: row.get(0)?,
        source_language: row.get(1)?,
        target_language: row.get(2)?,
        source_word: row.get(3)?,
        direct_translation: row.get(4)?,
        explanation: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
