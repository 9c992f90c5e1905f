/**
 * Server Configuration
 *
 * This module loads the configuration surface from environment variables:
 * listen port, store connection URI, session signing secret, identity
 * provider credentials, and the optional setup credential.
 *
 * # Error Handling
 *
 * Configuration problems are logged but do not prevent server startup.
 * A missing or unreachable database degrades to the in-memory store; a
 * missing session secret falls back to a development-only default with a
 * loud warning.
 */

use std::sync::Arc;

use crate::auth::provider::OAuthSettings;
use crate::server::state::SetupCredentials;
use crate::store::{MemStore, PgStore, Store};

const DEFAULT_PORT: u16 = 3000;

/// Server configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port (`PORT`)
    pub port: u16,
    /// Session signing secret (`SESSION_SECRET`)
    pub session_secret: String,
    /// Identity provider settings (`OAUTH_*`)
    pub oauth: OAuthSettings,
    /// Setup credentials (`SETUP_USERNAME` / `SETUP_PASSWORD`); `None`
    /// disables the `/setup` route
    pub setup: Option<SetupCredentials>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set; using an insecure development default");
            "bookrack-dev-secret".to_string()
        });

        let setup = match (
            std::env::var("SETUP_USERNAME"),
            std::env::var("SETUP_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => Some(SetupCredentials { username, password }),
            _ => {
                tracing::info!("SETUP_USERNAME/SETUP_PASSWORD not set; /setup is disabled");
                None
            }
        };

        let provider = env_or("OAUTH_PROVIDER", "google");
        let oauth = OAuthSettings {
            callback_url: std::env::var("OAUTH_CALLBACK_URL").unwrap_or_else(|_| {
                format!("http://localhost:{port}/auth/{provider}/callback")
            }),
            provider,
            client_id: env_or("OAUTH_CLIENT_ID", ""),
            client_secret: env_or("OAUTH_CLIENT_SECRET", ""),
            authorize_endpoint: env_or(
                "OAUTH_AUTHORIZE_URL",
                "https://accounts.google.com/o/oauth2/v2/auth",
            ),
            token_endpoint: env_or("OAUTH_TOKEN_URL", "https://oauth2.googleapis.com/token"),
            profile_endpoint: env_or(
                "OAUTH_PROFILE_URL",
                "https://openidconnect.googleapis.com/v1/userinfo",
            ),
        };

        if oauth.client_id.is_empty() {
            tracing::warn!("OAUTH_CLIENT_ID not set; provider logins will be rejected upstream");
        }

        Self {
            port,
            session_secret,
            oauth,
            setup,
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Load and initialize the entity store
///
/// Reads `DATABASE_URL` and connects a PostgreSQL-backed store. When the
/// variable is unset or the connection fails, the server falls back to the
/// in-memory store so it can still serve requests.
pub async fn load_store() -> Arc<dyn Store> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using the in-memory store");
            return Arc::new(MemStore::new());
        }
    };

    match PgStore::connect(&database_url).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to connect to database: {:?}", e);
            tracing::warn!("Falling back to the in-memory store");
            Arc::new(MemStore::new())
        }
    }
}
