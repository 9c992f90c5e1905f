/**
 * Session Tokens and Cookies
 *
 * This module issues and verifies the opaque session token that associates
 * a browser with a principal. The token is a signed JWT (signed, not
 * encrypted) carried in an HttpOnly cookie; it expires after 24 hours and
 * an explicit logout clears it.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Session lifetime: 24 hours
pub const SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Signing and verification keys derived from the configured session secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Create a session token bound to a user id
pub fn create_token(
    keys: &SessionKeys,
    user_id: Uuid,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = now_secs();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + SESSION_TTL_SECS,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify and decode a session token
pub fn verify_token(
    keys: &SessionKeys,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(token_data.claims)
}

/// Resolve a token back to a user id, if the token is valid
///
/// Expired, tampered, or malformed tokens all resolve to `None`; the caller
/// treats that as "no principal".
pub fn user_id_from_token(keys: &SessionKeys, token: &str) -> Option<Uuid> {
    let claims = verify_token(keys, token).ok()?;
    Uuid::parse_str(&claims.sub).ok()
}

/// Build the Set-Cookie value that installs a session token
pub fn session_cookie(token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}"
    )
}

/// Build the Set-Cookie value that clears the session
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Pull the session token out of a Cookie request header
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE).and_then(|rest| rest.strip_prefix('=')))
        .filter(|token| !token.is_empty())
}
