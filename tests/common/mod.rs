/*!
 * Common test utilities for the lexica test suite
 */

use std::sync::Arc;

use lexica::database::Repository;
use lexica::lookup::LookupService;
use lexica::providers::mock::MockProvider;
use lexica::server::AppState;

/// Build a lookup service over an in-memory store with the given mock
///
/// Returns a clone of the mock alongside the service so tests can assert
/// on its call count.
pub fn service_with_provider(provider: MockProvider) -> (LookupService, MockProvider) {
    let repository = Repository::new_in_memory().expect("Failed to create in-memory repository");
    let handle = provider.clone();
    let service = LookupService::new(repository, Arc::new(provider));
    (service, handle)
}

/// Build a lookup service backed by the always-working mock provider
pub fn working_service() -> (LookupService, MockProvider) {
    service_with_provider(MockProvider::working())
}

/// Build shared server state around the given mock provider
pub fn app_state(provider: MockProvider) -> (Arc<AppState>, MockProvider) {
    let (service, handle) = service_with_provider(provider);
    (Arc::new(AppState { service }), handle)
}
