/*!
 * # Lexica - Dictionary Lookup Service
 *
 * A small web backend for dictionary lookups: a client submits a word,
 * the service checks a local cache table and, on a miss, asks an LLM
 * provider for a translation and explanation, persisting the result.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: SQLite-backed translation store:
 *   - `database::connection`: Connection handling and schema bootstrap
 *   - `database::repository`: Typed store operations
 * - `lookup`: Cache-aside lookup orchestration:
 *   - `lookup::service`: Core lookup/delete flow
 *   - `lookup::prompts`: Prompt template for the provider
 *   - `lookup::parser`: Strict parsing of provider replies
 * - `providers`: Client implementations for LLM completion providers:
 *   - `providers::openai`: OpenAI-compatible API client
 *   - `providers::mock`: Mock provider for tests
 * - `server`: HTTP surface (axum router, CORS, handlers)
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod database;
pub mod errors;
pub mod lookup;
pub mod providers;
pub mod server;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::{DatabaseConnection, Repository, TranslationRecord};
pub use errors::{LookupError, ProviderError};
pub use lookup::LookupService;
pub use providers::CompletionProvider;
