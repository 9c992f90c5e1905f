//! Shared test fixtures
//!
//! Builds the real application router over the in-memory store with a
//! scripted identity provider, and wraps it in an `axum_test::TestServer`
//! that persists cookies like a browser would.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;

use bookrack::auth::provider::{IdentityProvider, ProviderError, ProviderProfile};
use bookrack::auth::sessions::SessionKeys;
use bookrack::routes::create_router;
use bookrack::server::state::{AppState, SetupCredentials};
use bookrack::store::MemStore;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password123";

/// Scripted identity provider
///
/// Accepts any code except `"bad"` and resolves it to one fixed profile,
/// standing in for the provider-side handshake.
pub struct FakeProvider {
    pub subject: String,
    pub display_name: String,
    pub email: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            subject: "subject-1".to_string(),
            display_name: "Ada Lovelace".to_string(),
            email: Some("ada@example.com".to_string()),
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    fn name(&self) -> &str {
        "testprov"
    }

    fn authorize_url(&self) -> String {
        "https://provider.test/authorize?client_id=test".to_string()
    }

    async fn exchange(&self, code: &str) -> Result<ProviderProfile, ProviderError> {
        if code == "bad" {
            return Err(ProviderError::denied("bad code"));
        }
        Ok(ProviderProfile {
            subject: self.subject.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
        })
    }
}

/// Application state over a fresh in-memory store
pub fn test_state() -> (AppState, Arc<MemStore>) {
    let store = Arc::new(MemStore::new());
    let state = AppState {
        store: store.clone(),
        sessions: SessionKeys::new("test-secret"),
        provider: Arc::new(FakeProvider::default()),
        setup: Some(SetupCredentials {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        }),
    };
    (state, store)
}

/// Cookie-persisting test server over the full router
pub fn test_server(state: AppState) -> TestServer {
    let mut server = TestServer::new(create_router(state)).expect("failed to build test server");
    server.save_cookies();
    server
}

/// Fresh server plus a handle on its store
pub fn server_with_store() -> (TestServer, Arc<MemStore>) {
    let (state, store) = test_state();
    (test_server(state), store)
}

/// Seed the admin credential via `/setup` and log the server's client in
pub async fn login_as_admin(server: &TestServer) {
    let setup = server.get("/setup").await;
    assert_eq!(setup.status_code(), axum::http::StatusCode::OK);

    let response = server
        .post("/login")
        .form(&[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)])
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::SEE_OTHER);
}
