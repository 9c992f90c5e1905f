/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central container handed to every handler via
 * dependency injection rather than ambient global lookup:
 *
 * - The entity store handle (`Arc<dyn Store>`)
 * - Session signing keys
 * - The identity provider collaborator
 * - Optional setup credentials for the `/setup` route
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract specific parts
 * of the state without needing the entire `AppState`, following Axum's
 * recommended pattern.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::auth::provider::IdentityProvider;
use crate::auth::sessions::SessionKeys;
use crate::store::Store;

/// Admin credential for the idempotent `/setup` route
///
/// Always supplied through configuration; the route is disabled when the
/// credential is absent.
#[derive(Clone, Debug)]
pub struct SetupCredentials {
    pub username: String,
    pub password: String,
}

/// Application state shared by all request handlers
///
/// Process-wide state is initialized once at startup and cloned cheaply
/// per handler (everything is behind an `Arc` or otherwise cheap to
/// clone).
#[derive(Clone)]
pub struct AppState {
    /// Entity store handle
    pub store: Arc<dyn Store>,

    /// Session token signing/verification keys
    pub sessions: SessionKeys,

    /// Identity provider collaborator
    pub provider: Arc<dyn IdentityProvider>,

    /// Setup credentials; `None` disables `/setup`
    pub setup: Option<SetupCredentials>,
}

/// Allow handlers to extract the store handle directly
impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allow handlers to extract the session keys directly
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

/// Allow handlers to extract the identity provider directly
impl FromRef<AppState> for Arc<dyn IdentityProvider> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.provider.clone()
    }
}

/// Allow handlers to extract the setup credentials directly
impl FromRef<AppState> for Option<SetupCredentials> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.setup.clone()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::auth::provider::{ProviderError, ProviderProfile};
    use crate::store::MemStore;
    use async_trait::async_trait;

    /// Provider stub for unit tests; always denies.
    struct DeniedProvider;

    #[async_trait]
    impl IdentityProvider for DeniedProvider {
        fn name(&self) -> &str {
            "testprov"
        }

        fn authorize_url(&self) -> String {
            "https://provider.test/authorize".to_string()
        }

        async fn exchange(&self, _code: &str) -> Result<ProviderProfile, ProviderError> {
            Err(ProviderError::denied("test provider"))
        }
    }

    /// Fresh state over an empty in-memory store.
    pub fn test_state() -> AppState {
        AppState {
            store: Arc::new(MemStore::new()),
            sessions: SessionKeys::new("test-secret"),
            provider: Arc::new(DeniedProvider),
            setup: Some(SetupCredentials {
                username: "admin".to_string(),
                password: "password123".to_string(),
            }),
        }
    }

    #[test]
    fn test_from_ref_extraction() {
        let state = test_state();
        let store: Arc<dyn Store> = FromRef::from_ref(&state);
        let _keys: SessionKeys = FromRef::from_ref(&state);
        let provider: Arc<dyn IdentityProvider> = FromRef::from_ref(&state);
        let setup: Option<SetupCredentials> = FromRef::from_ref(&state);

        assert_eq!(provider.name(), "testprov");
        assert!(setup.is_some());
        drop(store);
    }
}
