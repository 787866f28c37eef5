/*!
 * Mock provider implementations for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with a well-formed reply
 * - `MockProvider::fenced()` - Wraps the reply in a markdown code fence
 * - `MockProvider::failing()` - Always fails with an API error
 * - Malformed variants for exercising the strict reply parser
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::CompletionProvider;

/// Default well-formed reply used by the working behaviors
const DEFAULT_REPLY: &str = r#"{
  "latinWord": "amor",
  "turkishWord": "aşk",
  "explanation": "Sevgi, tutku. Example: omnia vincit amor."
}"#;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a well-formed JSON reply
    Working,
    /// Succeeds with the reply wrapped in a ```json code fence
    Fenced,
    /// Returns text that is not JSON at all
    MalformedJson,
    /// Returns JSON missing one of the expected keys
    MissingKeys,
    /// Returns JSON with an unexpected extra key
    ExtraKeys,
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing lookup behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    request_count: Arc<AtomicUsize>,
    /// Custom reply generator (optional)
    custom_reply: Option<fn(&str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_reply: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock whose reply is wrapped in a markdown code fence
    pub fn fenced() -> Self {
        Self::new(MockBehavior::Fenced)
    }

    /// Create a mock that returns non-JSON text
    pub fn malformed_json() -> Self {
        Self::new(MockBehavior::MalformedJson)
    }

    /// Create a mock whose JSON reply is missing an expected key
    pub fn missing_keys() -> Self {
        Self::new(MockBehavior::MissingKeys)
    }

    /// Create a mock whose JSON reply carries an unexpected extra key
    pub fn extra_keys() -> Self {
        Self::new(MockBehavior::ExtraKeys)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Set a custom reply generator, invoked with the prompt
    pub fn with_custom_reply(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_reply = Some(generator);
        self
    }

    /// Number of completion requests served so far
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            custom_reply: self.custom_reply,
        }
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                // Use custom reply if set, otherwise the default
                let text = if let Some(generator) = self.custom_reply {
                    generator(prompt)
                } else {
                    DEFAULT_REPLY.to_string()
                };
                Ok(text)
            }

            MockBehavior::Fenced => Ok(format!("```json\n{}\n```", DEFAULT_REPLY)),

            MockBehavior::MalformedJson => {
                Ok("Sorry, I could not find that word.".to_string())
            }

            MockBehavior::MissingKeys => {
                Ok(r#"{"latinWord": "amor", "explanation": "no translation key"}"#.to_string())
            }

            MockBehavior::ExtraKeys => Ok(r#"{
  "latinWord": "amor",
  "turkishWord": "aşk",
  "explanation": "ok",
  "confidence": 0.99
}"#
            .to_string()),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
            _ => Ok(()),
        }
    }
}
