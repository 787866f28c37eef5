/*!
 * Tests for the HTTP surface: handler status codes and reply bodies
 */

use axum::Json;
use axum::body::to_bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use lexica::providers::mock::MockProvider;
use lexica::server::routes::{self, ErrorBody, TranslateBody};

use crate::common::app_state;

fn translate_body(word: &str, source_lang: &str, target_lang: &str) -> TranslateBody {
    TranslateBody {
        word: word.to_string(),
        source_lang: source_lang.to_string(),
        target_lang: target_lang.to_string(),
    }
}

#[tokio::test]
async fn test_testEndpoint_shouldReportBackendRunning() {
    let reply = routes::test().await;
    assert_eq!(reply.0.message, "Backend is running");
}

#[tokio::test]
async fn test_indexEndpoint_shouldReturnPlainText() {
    let reply = routes::index().await;
    assert_eq!(reply, "Dictionary backend is running");
}

#[tokio::test]
async fn test_translate_withValidWord_shouldReturnStoredRecord() {
    let (state, provider) = app_state(MockProvider::working());

    let Json(record) = routes::translate(
        State(state.clone()),
        Json(translate_body("amor", "la", "tr")),
    )
    .await
    .expect("Translate failed");

    assert!(record.id > 0);
    assert_eq!(record.source_word, "amor");
    assert_eq!(record.direct_translation, "aşk");
    assert_eq!(provider.call_count(), 1);

    // The wire format carries the row as stored: snake_case columns.
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("source_word").is_some());
    assert!(json.get("direct_translation").is_some());
    assert!(json.get("created_at").is_some());
    assert!(json["id"].is_i64());
}

#[tokio::test]
async fn test_translate_withMissingFields_shouldReturn400Body() {
    let (state, provider) = app_state(MockProvider::working());

    let error = routes::translate(State(state.clone()), Json(translate_body("", "la", "tr")))
        .await
        .err()
        .expect("Expected an error");

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "Invalid request");
    assert_eq!(body.details, "Missing required parameters");

    assert_eq!(provider.call_count(), 0);
    assert_eq!(state.service.repository().count_records().await.unwrap(), 0);
}

#[tokio::test]
async fn test_translate_withFailingProvider_shouldReturn500() {
    let (state, _provider) = app_state(MockProvider::failing());

    let (status, Json(body)) =
        routes::translate(State(state.clone()), Json(translate_body("amor", "la", "tr")))
            .await
            .err()
            .expect("Expected an error");

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Internal server error");
    assert!(!body.details.is_empty());
}

#[tokio::test]
async fn test_translate_withMalformedReply_shouldReturn500AndPersistNothing() {
    let (state, _provider) = app_state(MockProvider::malformed_json());

    let (status, _body) =
        routes::translate(State(state.clone()), Json(translate_body("amor", "la", "tr")))
            .await
            .err()
            .expect("Expected an error");

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(state.service.repository().count_records().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_withExistingId_shouldReturnDeletedRecord() {
    let (state, _provider) = app_state(MockProvider::working());

    let Json(record) = routes::translate(
        State(state.clone()),
        Json(translate_body("amor", "la", "tr")),
    )
    .await
    .expect("Translate failed");

    let Json(reply) = routes::delete_translation(State(state.clone()), Path(record.id))
        .await
        .expect("Delete failed");

    assert_eq!(reply.message, "Translation deleted");
    assert_eq!(reply.deleted.id, record.id);

    // The id is gone afterwards
    let (status, _body) = routes::delete_translation(State(state.clone()), Path(record.id))
        .await
        .err()
        .expect("Expected an error");
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_withUnknownId_shouldReturn404Body() {
    let (state, _provider) = app_state(MockProvider::working());

    let error = routes::delete_translation(State(state.clone()), Path(42))
        .await
        .err()
        .expect("Expected an error");

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "Translation not found");
}
