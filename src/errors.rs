/*!
 * Error types for the lexica application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },
}

/// Errors that can occur during a lookup or delete request
#[derive(Error, Debug)]
pub enum LookupError {
    /// Required request fields are missing or empty
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The requested record does not exist
    #[error("Translation not found")]
    NotFound,

    /// The external provider failed or returned unusable content
    #[error("Provider error: {0}")]
    Upstream(#[from] ProviderError),

    /// The translation store failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<anyhow::Error> for LookupError {
    fn from(error: anyhow::Error) -> Self {
        Self::Storage(error.to_string())
    }
}
