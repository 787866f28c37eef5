/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};

/// A resolved dictionary lookup, one row in the `words` table.
///
/// Serialized field names match the column names, so an HTTP response body
/// carries the row as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Store-assigned identifier; immutable once created
    pub id: i64,
    /// Source language code (e.g. "la")
    pub source_language: String,
    /// Target language code (e.g. "tr")
    pub target_language: String,
    /// The looked-up word, as persisted
    pub source_word: String,
    /// Short direct translation
    pub direct_translation: String,
    /// Free-text elaboration; may be empty
    pub explanation: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// RFC 3339 update timestamp; set at creation, never touched afterwards
    pub updated_at: String,
}
