/**
 * Server Initialization
 *
 * This module assembles the application: configuration, the entity store,
 * the identity provider collaborator, and the router.
 *
 * # Initialization Process
 *
 * 1. Load configuration from the environment
 * 2. Load the entity store (PostgreSQL, or in-memory fallback)
 * 3. Build the application state
 * 4. Create the router with all routes and middleware
 */

use axum::Router;
use std::sync::Arc;

use crate::auth::provider::HttpIdentityProvider;
use crate::auth::sessions::SessionKeys;
use crate::routes::router::create_router;
use crate::server::config::{load_store, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application from the environment
///
/// Returns the router together with the resolved configuration so the
/// caller can bind the listen port.
pub async fn create_app() -> (Router, ServerConfig) {
    tracing::info!("Initializing bookrack server");

    let config = ServerConfig::from_env();
    let store = load_store().await;

    let state = AppState {
        store,
        sessions: SessionKeys::new(&config.session_secret),
        provider: Arc::new(HttpIdentityProvider::new(config.oauth.clone())),
        setup: config.setup.clone(),
    };

    let app = create_router(state);
    tracing::info!("Router configured");

    (app, config)
}
