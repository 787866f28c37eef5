/*!
 * Database schema definition.
 *
 * This module contains the SQL schema for the translation store and
 * handles its idempotent initialization.
 */

use anyhow::Result;
use log::info;
use rusqlite::Connection;

/// Initialize the database schema
///
/// Safe to call on every startup: all statements are `IF NOT EXISTS`.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    // Enable WAL mode for better concurrency and crash recovery
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // The lookup key is unique at the storage layer; concurrent identical
    // misses collapse into a single surviving row (see Repository::insert).
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS words (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            source_language TEXT NOT NULL,
            target_language TEXT NOT NULL,
            source_word TEXT NOT NULL,
            direct_translation TEXT NOT NULL,
            explanation TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(source_word, source_language, target_language)
        );
        "#,
    )?;

    info!("Database schema initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().expect("Failed to create in-memory database")
    }

    #[test]
    fn test_initializeSchema_withFreshDatabase_shouldCreateWordsTable() {
        let conn = create_test_connection();

        initialize_schema(&conn).expect("Failed to initialize schema");

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"words".to_string()));
    }

    #[test]
    fn test_initializeSchema_calledTwice_shouldBeIdempotent() {
        let conn = create_test_connection();

        initialize_schema(&conn).expect("First initialization failed");
        initialize_schema(&conn).expect("Second initialization failed");
    }

    #[test]
    fn test_uniqueKey_shouldRejectDuplicateTriples() {
        let conn = create_test_connection();
        initialize_schema(&conn).expect("Failed to initialize schema");

        conn.execute(
            "INSERT INTO words (source_language, target_language, source_word, direct_translation, explanation, created_at, updated_at)
             VALUES ('la', 'tr', 'amor', 'ask', '', datetime('now'), datetime('now'))",
            [],
        )
        .expect("First insert failed");

        let result = conn.execute(
            "INSERT INTO words (source_language, target_language, source_word, direct_translation, explanation, created_at, updated_at)
             VALUES ('la', 'tr', 'amor', 'sevgi', '', datetime('now'), datetime('now'))",
            [],
        );

        assert!(result.is_err(), "Unique constraint should prevent insert");
    }

    #[test]
    fn test_uniqueKey_shouldAllowSameWordForOtherLanguagePair() {
        let conn = create_test_connection();
        initialize_schema(&conn).expect("Failed to initialize schema");

        conn.execute(
            "INSERT INTO words (source_language, target_language, source_word, direct_translation, explanation, created_at, updated_at)
             VALUES ('la', 'tr', 'amor', 'ask', '', datetime('now'), datetime('now'))",
            [],
        )
        .expect("First insert failed");

        conn.execute(
            "INSERT INTO words (source_language, target_language, source_word, direct_translation, explanation, created_at, updated_at)
             VALUES ('la', 'en', 'amor', 'love', '', datetime('now'), datetime('now'))",
            [],
        )
        .expect("Different language pair should insert");
    }
}
