//! Authentication Module
//!
//! This module handles identity verification and session management. It
//! provides HTTP handlers for the login, logout, provider, and setup
//! endpoints, and the session token machinery the middleware relies on.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`sessions`** - Signed session tokens and the session cookie
//! - **`provider`** - Identity provider boundary and reqwest implementation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Local login**: username and password form → bcrypt verification →
//!    session cookie set → redirect to `/items`
//! 2. **Provider login**: redirect to the provider → callback with a code →
//!    code exchanged for a profile → user found-or-created → session cookie
//! 3. **Logout**: session cookie cleared → redirect to `/login`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt; verification is a constant-time
//!   hash compare
//! - Invalid credentials re-render the login page with a generic error (no
//!   username enumeration)
//! - Session tokens are signed, not encrypted, and expire after 24 hours

/// Signed session tokens and cookie helpers
pub mod sessions;

/// Identity provider boundary
pub mod provider;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{index, login_page, login_submit, logout, oauth_callback, oauth_start, setup};
pub use provider::{IdentityProvider, ProviderError, ProviderProfile};
pub use sessions::SessionKeys;
