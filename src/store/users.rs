/**
 * User Record
 *
 * A user is created either by the `/setup` upsert (local credentials) or on
 * first successful login through an identity provider. Records are never
 * updated afterwards except by a repeated `/setup`, and never deleted.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identity record
///
/// A single struct covers both identity variants with fixed optional
/// fields rather than a free-form map:
///
/// - Local variant: `username` and `password_hash` are set, `provider` and
///   `subject` are `None`.
/// - Provider variant: `provider` and `subject` are set, `username` and
///   `password_hash` are `None`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Local username (local-credentials variant only)
    pub username: Option<String>,
    /// Identity provider name (provider variant only)
    pub provider: Option<String>,
    /// Provider-scoped subject id (provider variant only)
    pub subject: Option<String>,
    /// Display name shown on rendered pages
    pub display_name: String,
    /// Email address, when the provider supplied one
    pub email: Option<String>,
    /// Hashed password (bcrypt, local-credentials variant only)
    pub password_hash: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}
