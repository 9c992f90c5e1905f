/**
 * Login Handlers
 *
 * Local-credentials authentication:
 *
 * 1. Look up the user by username
 * 2. Verify the password with bcrypt (constant-time hash compare)
 * 3. Issue the session cookie and redirect to the catalog
 *
 * # Security
 *
 * Unknown usernames and wrong passwords take the same path: the login page
 * is re-rendered with a generic error indicator and no cookie is issued,
 * so responses never reveal whether a username exists.
 */

use axum::{
    extract::{Form, State},
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::auth::handlers::types::LoginForm;
use crate::auth::sessions::{clear_session_cookie, create_token, session_cookie};
use crate::catalog::views;
use crate::error::AppError;
use crate::middleware::OptionalUser;
use crate::server::state::AppState;

/// `GET /` - route by session presence
///
/// Authenticated browsers land on the catalog, everyone else on the login
/// page.
pub async fn index(OptionalUser(user): OptionalUser) -> Redirect {
    if user.is_some() {
        Redirect::to("/items")
    } else {
        Redirect::to("/login")
    }
}

/// `GET /login` - render the login page
pub async fn login_page() -> Html<String> {
    Html(views::login_page(false))
}

/// `POST /login` - verify credentials and open a session
///
/// On success the response both sets the session cookie and redirects to
/// `/items`. On failure the login page is re-rendered with the error
/// indicator (no redirect, no cookie).
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    tracing::info!("Login request for: {}", form.username);

    let user = state.store.find_user_by_username(&form.username).await?;

    let Some(user) = user else {
        tracing::warn!("Login failed: unknown user");
        return Ok(Html(views::login_page(true)).into_response());
    };

    let Some(password_hash) = user.password_hash.as_deref() else {
        // Provider-created account without local credentials.
        tracing::warn!("Login failed: user has no local credentials");
        return Ok(Html(views::login_page(true)).into_response());
    };

    if !bcrypt::verify(&form.password, password_hash)? {
        tracing::warn!("Login failed: invalid password for {}", form.username);
        return Ok(Html(views::login_page(true)).into_response());
    }

    let token = create_token(&state.sessions, user.id)?;
    tracing::info!("User logged in: {}", user.display_name);

    Ok((
        [(SET_COOKIE, session_cookie(&token))],
        Redirect::to("/items"),
    )
        .into_response())
}

/// `GET /logout` / `POST /logout` - destroy the session
pub async fn logout() -> impl IntoResponse {
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to("/login"))
}
