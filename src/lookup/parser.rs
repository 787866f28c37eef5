/*!
 * Strict parsing of provider replies.
 *
 * The provider owes no schema guarantee, so the reply is treated as an
 * untrusted string: an optional markdown code fence is stripped, then the
 * JSON must match the expected shape exactly. Any missing, extra or
 * mistyped field fails the whole request.
 */

use serde::Deserialize;

use crate::errors::ProviderError;

/// The translation object the provider is asked to produce
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderTranslation {
    /// The Latin word, possibly spelling-corrected by the provider
    #[serde(rename = "latinWord")]
    pub latin_word: String,

    /// The direct Turkish translation
    #[serde(rename = "turkishWord")]
    pub turkish_word: String,

    /// Free-text elaboration; may be empty
    pub explanation: String,
}

/// Parse a raw provider reply into a translation object
pub fn parse_reply(raw: &str) -> Result<ProviderTranslation, ProviderError> {
    let body = strip_code_fence(raw);

    serde_json::from_str(body).map_err(|e| {
        ProviderError::ParseError(format!(
            "Provider reply is not a valid translation object: {}",
            e
        ))
    })
}

/// Strip a wrapping markdown code fence, if present
///
/// Handles both ``` and ```json openers, wherever surrounding whitespace
/// puts them; anything else is returned trimmed and untouched.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    rest.trim()
}
