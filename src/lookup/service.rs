/*!
 * Core lookup service implementation.
 *
 * This module contains the main LookupService struct, which orchestrates
 * the cache-aside flow: check the store, fall back to the completion
 * provider on a miss, persist the parsed reply.
 */

use log::{debug, info};
use std::sync::Arc;

use crate::database::{Repository, TranslationRecord};
use crate::errors::LookupError;
use crate::providers::CompletionProvider;

use super::parser;
use super::prompts::PromptTemplate;

/// Service orchestrating cache-aside dictionary lookups
///
/// Dependencies are injected at construction; the service itself is
/// stateless across requests and cheap to clone.
#[derive(Clone)]
pub struct LookupService {
    /// Translation store
    repository: Repository,
    /// Completion provider used on cache misses
    provider: Arc<dyn CompletionProvider>,
    /// Prompt template sent to the provider
    template: PromptTemplate,
}

impl LookupService {
    /// Create a new lookup service with the given store and provider
    pub fn new(repository: Repository, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            repository,
            provider,
            template: PromptTemplate::dictionary_translator(),
        }
    }

    /// Resolve a lookup request
    ///
    /// Returns the stored record on a cache hit. On a miss, asks the
    /// provider, persists the parsed reply under the request's language
    /// pair and returns the new record. Every miss performs exactly one
    /// provider call; a parse or provider failure persists nothing.
    pub async fn lookup(
        &self,
        word: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslationRecord, LookupError> {
        if word.is_empty() || source_lang.is_empty() || target_lang.is_empty() {
            return Err(LookupError::InvalidRequest(
                "Missing required parameters".to_string(),
            ));
        }

        if let Some(existing) = self
            .repository
            .find_exact(word, source_lang, target_lang)
            .await?
        {
            debug!(
                "Cache hit for '{}' ({} -> {})",
                word, source_lang, target_lang
            );
            return Ok(existing);
        }

        debug!("Cache miss for '{}', asking provider", word);
        let prompt = self.template.render(word);
        let reply = self.provider.complete(&prompt).await?;
        let translation = parser::parse_reply(&reply)?;

        // Stored under the request's language pair, but with the provider's
        // (possibly spelling-corrected) word as the key.
        let record = self
            .repository
            .insert(
                source_lang,
                target_lang,
                &translation.latin_word,
                &translation.turkish_word,
                &translation.explanation,
            )
            .await?;

        info!(
            "Stored translation '{}' -> '{}' (id {})",
            record.source_word, record.direct_translation, record.id
        );
        Ok(record)
    }

    /// Delete a stored record by id
    pub async fn delete(&self, id: i64) -> Result<TranslationRecord, LookupError> {
        match self.repository.delete_by_id(id).await? {
            Some(record) => {
                info!("Deleted translation '{}' (id {})", record.source_word, id);
                Ok(record)
            }
            None => Err(LookupError::NotFound),
        }
    }

    /// The underlying repository (test support)
    pub fn repository(&self) -> &Repository {
        &self.repository
    }
}
