/*!
 * Tests for the cache-aside lookup service
 */

use lexica::errors::LookupError;
use lexica::providers::mock::MockProvider;

use crate::common::{service_with_provider, working_service};

#[tokio::test]
async fn test_lookup_withExistingRecord_shouldNotCallProvider() {
    let (service, provider) = working_service();

    let stored = service
        .repository()
        .insert("la", "tr", "amor", "aşk", "Sevgi.")
        .await
        .expect("Failed to seed record");

    let found = service
        .lookup("amor", "la", "tr")
        .await
        .expect("Lookup failed");

    assert_eq!(found.id, stored.id);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_lookup_withMiss_shouldCallProviderOnceAndPersist() {
    let (service, provider) = working_service();

    let record = service
        .lookup("amor", "la", "tr")
        .await
        .expect("Lookup failed");

    assert!(record.id > 0);
    assert_eq!(record.source_word, "amor");
    assert_eq!(record.direct_translation, "aşk");
    assert_eq!(record.source_language, "la");
    assert_eq!(record.target_language, "tr");
    assert_eq!(provider.call_count(), 1);
    assert_eq!(service.repository().count_records().await.unwrap(), 1);
}

#[tokio::test]
async fn test_lookup_repeated_shouldReturnSameRecord() {
    let (service, provider) = working_service();

    let first = service.lookup("amor", "la", "tr").await.unwrap();
    let second = service.lookup("amor", "la", "tr").await.unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(provider.call_count(), 1);
    assert_eq!(service.repository().count_records().await.unwrap(), 1);
}

#[tokio::test]
async fn test_lookup_withMissingFields_shouldRejectWithoutSideEffects() {
    let (service, provider) = working_service();

    for (word, source, target) in [("", "la", "tr"), ("amor", "", "tr"), ("amor", "la", "")] {
        let result = service.lookup(word, source, target).await;
        assert!(matches!(result, Err(LookupError::InvalidRequest(_))));
    }

    assert_eq!(provider.call_count(), 0);
    assert_eq!(service.repository().count_records().await.unwrap(), 0);
}

#[tokio::test]
async fn test_lookup_withWhitespaceWord_shouldNotBeRejected() {
    // Only truly empty fields are invalid; no trimming is applied.
    let (service, provider) = working_service();

    let result = service.lookup(" ", "la", "tr").await;

    assert!(result.is_ok());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_lookup_withFencedReply_shouldParse() {
    let (service, _provider) = service_with_provider(MockProvider::fenced());

    let record = service.lookup("amor", "la", "tr").await.unwrap();

    assert_eq!(record.direct_translation, "aşk");
}

#[tokio::test]
async fn test_lookup_withFailingProvider_shouldFailWithoutPersisting() {
    let (service, provider) = service_with_provider(MockProvider::failing());

    let result = service.lookup("amor", "la", "tr").await;

    assert!(matches!(result, Err(LookupError::Upstream(_))));
    assert_eq!(provider.call_count(), 1);
    assert_eq!(service.repository().count_records().await.unwrap(), 0);
}

#[tokio::test]
async fn test_lookup_withMalformedReply_shouldFailWithoutPersisting() {
    for provider in [
        MockProvider::malformed_json(),
        MockProvider::missing_keys(),
        MockProvider::extra_keys(),
    ] {
        let (service, _handle) = service_with_provider(provider);

        let result = service.lookup("amor", "la", "tr").await;

        assert!(matches!(result, Err(LookupError::Upstream(_))));
        assert_eq!(service.repository().count_records().await.unwrap(), 0);
    }
}

#[tokio::test]
async fn test_lookup_withCorrectedSpelling_shouldStoreProvidersWord() {
    // The provider's latinWord is persisted, not the raw request word, so a
    // spelling-corrected reply leaves the original misspelling uncached.
    let provider = MockProvider::working().with_custom_reply(|_prompt| {
        r#"{"latinWord": "amor", "turkishWord": "aşk", "explanation": "corrected"}"#.to_string()
    });
    let (service, handle) = service_with_provider(provider);

    let record = service.lookup("amr", "la", "tr").await.unwrap();
    assert_eq!(record.source_word, "amor");

    service.lookup("amr", "la", "tr").await.unwrap();
    assert_eq!(handle.call_count(), 2);
    assert_eq!(service.repository().count_records().await.unwrap(), 1);
}

#[tokio::test]
async fn test_lookup_concurrentIdenticalMisses_shouldCollapseToOneRow() {
    let (service, provider) = working_service();
    let other = service.clone();

    let (first, second) = tokio::join!(
        service.lookup("amor", "la", "tr"),
        other.lookup("amor", "la", "tr"),
    );

    let first = first.expect("First lookup failed");
    let second = second.expect("Second lookup failed");

    assert_eq!(first.id, second.id);
    assert_eq!(service.repository().count_records().await.unwrap(), 1);
    // Both requests may have paid a provider call; neither may skip it
    // without a cache hit.
    assert!((1..=2).contains(&provider.call_count()));
}

#[tokio::test]
async fn test_delete_withExistingId_shouldRemoveRecord() {
    let (service, _provider) = working_service();

    let record = service.lookup("amor", "la", "tr").await.unwrap();

    let deleted = service.delete(record.id).await.expect("Delete failed");
    assert_eq!(deleted.id, record.id);
    assert_eq!(deleted.source_word, "amor");

    let result = service.delete(record.id).await;
    assert!(matches!(result, Err(LookupError::NotFound)));
    assert_eq!(service.repository().count_records().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_withUnknownId_shouldLeaveTableUnchanged() {
    let (service, _provider) = working_service();

    service.lookup("amor", "la", "tr").await.unwrap();

    let result = service.delete(9999).await;

    assert!(matches!(result, Err(LookupError::NotFound)));
    assert_eq!(service.repository().count_records().await.unwrap(), 1);
}
