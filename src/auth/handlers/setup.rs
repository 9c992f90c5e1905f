/**
 * Setup Handler
 *
 * `GET /setup` idempotently upserts one admin credential so a fresh
 * deployment has a user to log in with. The credential comes from
 * configuration (`SETUP_USERNAME` / `SETUP_PASSWORD`); when it is not
 * configured the route answers 404 and nothing is created. The password is
 * never echoed back.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::catalog::views;
use crate::error::AppError;
use crate::server::state::AppState;

/// `GET /setup` - upsert the configured admin credential
pub async fn setup(State(state): State<AppState>) -> Result<Response, AppError> {
    let Some(credentials) = state.setup.as_ref() else {
        return Ok((StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response());
    };

    let password_hash = bcrypt::hash(&credentials.password, bcrypt::DEFAULT_COST)?;
    let user = state
        .store
        .upsert_local_user(&credentials.username, &password_hash, &credentials.username)
        .await?;

    tracing::info!("Setup upserted user: {}", credentials.username);
    Ok(Html(views::setup_done_page(user.username.as_deref().unwrap_or(""))).into_response())
}
