/**
 * Identity Provider Handlers
 *
 * The browser-facing half of the provider login: `GET /auth/{provider}`
 * hands the browser to the provider, and the callback turns the returned
 * code into a principal.
 *
 * Any provider-level failure (denial, missing code, exchange error)
 * redirects back to the login page with no session issued.
 */

use axum::{
    extract::{Path, Query, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::auth::handlers::types::CallbackQuery;
use crate::auth::sessions::{create_token, session_cookie};
use crate::catalog::views;
use crate::error::AppError;
use crate::server::state::AppState;

/// `GET /auth/{provider}` - redirect to the provider's authorize URL
pub async fn oauth_start(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Response {
    if provider != state.provider.name() {
        return not_found();
    }

    Redirect::to(&state.provider.authorize_url()).into_response()
}

/// `GET /auth/{provider}/callback` - resolve the callback to a principal
///
/// Exchanges the code for a verified profile, then resolves the profile to
/// a user with a single atomic find-or-create keyed on the provider-scoped
/// subject id. A second login with the same profile reuses the record
/// created by the first.
pub async fn oauth_callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, AppError> {
    if provider != state.provider.name() {
        return Ok(not_found());
    }

    if let Some(error) = query.error {
        tracing::warn!("Provider denied login: {}", error);
        return Ok(Redirect::to("/login").into_response());
    }

    let Some(code) = query.code else {
        tracing::warn!("Provider callback without code");
        return Ok(Redirect::to("/login").into_response());
    };

    let profile = match state.provider.exchange(&code).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!("Provider exchange failed: {:?}", e);
            return Ok(Redirect::to("/login").into_response());
        }
    };

    let user = state
        .store
        .find_or_create_oauth_user(
            state.provider.name(),
            &profile.subject,
            &profile.display_name,
            profile.email.as_deref(),
        )
        .await?;

    let token = create_token(&state.sessions, user.id)?;
    tracing::info!("Provider login for {}", user.display_name);

    Ok((
        [(SET_COOKIE, session_cookie(&token))],
        Redirect::to("/items"),
    )
        .into_response())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
}
