//! Middleware Module
//!
//! Request-processing middleware:
//!
//! - **`auth`** - Session resolution and the page authorization gate

/// Session resolution and authorization gate
pub mod auth;

pub use auth::{require_login, resolve_session, AuthUser, CurrentUser, OptionalUser};
