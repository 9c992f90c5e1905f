/**
 * Session Middleware and Authorization Gate
 *
 * Two layers cooperate here:
 *
 * 1. `resolve_session` runs on every request. It reads the session cookie,
 *    verifies the token, re-loads the user record, and attaches a
 *    `CurrentUser` to the request extensions. A missing or invalid session
 *    passes through without a principal; only a store failure while
 *    re-loading the record rejects the request, as a 500-class response.
 * 2. `require_login` wraps the page routes only. A request without a
 *    resolved principal is redirected to the login page.
 *
 * The API routes deliberately carry neither gate: every `/api/items`
 * endpoint answers regardless of session state.
 *
 * A valid token whose user record has since been deleted resolves to "no
 * principal", so stale sessions behave exactly like logged-out browsers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::COOKIE, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use uuid::Uuid;

use crate::auth::sessions::{token_from_cookie_header, user_id_from_token};
use crate::error::AppError;
use crate::server::state::AppState;

/// The principal resolved from the session cookie
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub display_name: String,
}

/// Session resolution middleware
///
/// Attaches a `CurrentUser` to the request extensions when the session
/// cookie carries a valid token for an existing user. Requests without a
/// principal pass through untouched; gating is a separate concern. A store
/// failure while loading the record is a server error, not a silent
/// logout.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(user_id) = session_user_id(&state, &request) {
        match state.store.find_user_by_id(user_id).await {
            Ok(Some(user)) => {
                request.extensions_mut().insert(CurrentUser {
                    id: user.id,
                    display_name: user.display_name,
                });
            }
            Ok(None) => {
                // Stale session: the user record is gone. No principal.
                tracing::warn!("session references missing user {}", user_id);
            }
            Err(e) => {
                tracing::error!("failed to load session user: {:?}", e);
                return AppError::from(e).into_response();
            }
        }
    }

    next.run(request).await
}

fn session_user_id(state: &AppState, request: &Request) -> Option<Uuid> {
    let cookie_header = request.headers().get(COOKIE)?.to_str().ok()?;
    let token = token_from_cookie_header(cookie_header)?;
    user_id_from_token(&state.sessions, token)
}

/// Authorization gate for page routes
///
/// Pure predicate over the resolved principal: present → allow, absent →
/// redirect to the login page.
pub async fn require_login(request: Request, next: Next) -> Response {
    if request.extensions().get::<CurrentUser>().is_none() {
        return Redirect::to("/login").into_response();
    }
    next.run(request).await
}

/// Axum extractor for the resolved principal
///
/// For handlers behind `require_login` this always succeeds; the rejection
/// mirrors the gate and redirects to the login page.
#[derive(Clone, Debug)]
pub struct AuthUser(pub CurrentUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| Redirect::to("/login"))
    }
}

/// Axum extractor for an optional principal
///
/// Used by routes that behave differently for logged-in browsers without
/// requiring a session (for example `GET /`).
#[derive(Clone, Debug)]
pub struct OptionalUser(pub Option<CurrentUser>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalUser(parts.extensions.get::<CurrentUser>().cloned()))
    }
}
