/*!
 * HTTP handlers and error mapping.
 *
 * Every error is caught here and mapped to a JSON body `{error, details}`
 * with the matching status code.
 */

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::database::TranslationRecord;
use crate::errors::LookupError;

use super::AppState;

/// Body of a POST /translate request
///
/// Missing keys default to empty strings and fail validation downstream,
/// so a partial body turns into a 400 rather than a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateBody {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub source_lang: String,
    #[serde(default)]
    pub target_lang: String,
}

/// JSON error body returned for every failure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

/// Reply to a successful DELETE
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteReply {
    pub message: String,
    pub deleted: TranslationRecord,
}

/// Reply to GET /test
#[derive(Debug, Serialize, Deserialize)]
pub struct TestReply {
    pub message: String,
}

/// Map a lookup error to its status code and JSON body
fn error_response(error: &LookupError) -> (StatusCode, Json<ErrorBody>) {
    let (status, message, details) = match error {
        LookupError::InvalidRequest(details) => {
            (StatusCode::BAD_REQUEST, "Invalid request", details.clone())
        }
        LookupError::NotFound => (
            StatusCode::NOT_FOUND,
            "Translation not found",
            "No record with that id".to_string(),
        ),
        LookupError::Upstream(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            e.to_string(),
        ),
        LookupError::Storage(details) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            details.clone(),
        ),
    };

    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
            details,
        }),
    )
}

/// GET / - plain text liveness reply
pub async fn index() -> &'static str {
    "Dictionary backend is running"
}

/// GET /test - JSON liveness reply
pub async fn test() -> Json<TestReply> {
    Json(TestReply {
        message: "Backend is running".to_string(),
    })
}

/// POST /translate - resolve a lookup, store-first with provider fallback
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TranslateBody>,
) -> Result<Json<TranslationRecord>, (StatusCode, Json<ErrorBody>)> {
    debug!(
        "Translate request: '{}' ({} -> {})",
        body.word, body.source_lang, body.target_lang
    );

    let record = state
        .service
        .lookup(&body.word, &body.source_lang, &body.target_lang)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(record))
}

/// DELETE /delete/{id} - remove a stored record
pub async fn delete_translation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteReply>, (StatusCode, Json<ErrorBody>)> {
    debug!("Delete request for id {}", id);

    let record = state
        .service
        .delete(id)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(DeleteReply {
        message: "Translation deleted".to_string(),
        deleted: record,
    }))
}
