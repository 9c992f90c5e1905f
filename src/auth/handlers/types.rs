/**
 * Authentication Handler Types
 *
 * Request types used by the authentication handlers.
 */

use serde::Deserialize;

/// Login form submission
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Local username
    #[serde(default)]
    pub username: String,
    /// Password (verified against the stored hash, never logged)
    #[serde(default)]
    pub password: String,
}

/// Query parameters of the provider callback
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// Authorization code, present on success
    pub code: Option<String>,
    /// Error indicator, present when the provider denied the login
    pub error: Option<String>,
}
