/**
 * Application Error Types
 *
 * This module defines the error taxonomy for the server:
 *
 * - Identity provider failures (denial, bad exchange)
 * - Not-found errors for referenced record ids
 * - Store/connectivity failures
 * - Session token failures
 *
 * Store failures are reported as generic 500-class responses with no retry;
 * no distinction is made between transient and permanent failures.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::provider::ProviderError;
use crate::store::StoreError;

/// Application error type
///
/// Each variant maps to an HTTP status code via [`AppError::status_code`].
/// Handlers can return this directly; the `IntoResponse` implementation in
/// `error::conversion` produces a flat `{ "error": ..., "status": ... }`
/// JSON body.
#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced record id does not exist
    #[error("not found")]
    NotFound,

    /// Entity store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Identity provider failure
    #[error("identity provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Password hashing or verification failure
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Session token creation or verification failure
    #[error("session token error: {0}")]
    Session(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Provider` - 502 Bad Gateway
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Provider(_) => StatusCode::BAD_GATEWAY,
            Self::Store(_) | Self::PasswordHash(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
