/*!
 * SQLite-backed translation store.
 *
 * This module contains the persistence layer for resolved lookups:
 *
 * - `connection`: Database connection handling and schema bootstrap
 * - `schema`: Table definitions and idempotent initialization
 * - `models`: Database entity models
 * - `repository`: High-level typed store operations
 */

// Re-export main types for easier usage
pub use self::connection::DatabaseConnection;
pub use self::models::TranslationRecord;
pub use self::repository::Repository;

// Submodules
pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;
