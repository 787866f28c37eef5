/*!
 * Cache-aside lookup orchestration.
 *
 * This module contains the core functionality for resolving dictionary
 * lookups against the store with an external provider fallback:
 *
 * - `service`: Core lookup/delete flow and service definition
 * - `prompts`: Prompt template for the completion provider
 * - `parser`: Strict parsing of provider replies
 */

// Re-export main types for easier usage
pub use self::parser::ProviderTranslation;
pub use self::prompts::PromptTemplate;
pub use self::service::LookupService;

// Submodules
pub mod parser;
pub mod prompts;
pub mod service;
