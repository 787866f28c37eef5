/*!
 * Provider implementations for LLM completion services.
 *
 * This module contains client implementations for completion providers:
 * - OpenAI: OpenAI-compatible chat completions API
 * - Mock: Canned replies for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all completion providers
///
/// This trait defines the interface that all provider implementations must
/// follow. It is object safe so the lookup service can hold an injected
/// `Arc<dyn CompletionProvider>` and be exercised with fakes in tests.
#[async_trait]
pub trait CompletionProvider: Send + Sync + Debug {
    /// Request a single completion for the given prompt
    ///
    /// # Arguments
    /// * `prompt` - The prompt to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The completion text or an error
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is successful, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod mock;
pub mod openai;
