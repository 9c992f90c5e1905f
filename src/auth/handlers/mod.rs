//! Authentication Handlers
//!
//! HTTP handlers for the session-management surface:
//!
//! - **`types`** - Request types shared across handlers
//! - **`login`** - Root redirect, login page/submit, logout
//! - **`oauth`** - Provider redirect and callback
//! - **`setup`** - Idempotent admin-credential upsert

/// Request types
pub mod types;

/// Login page, login submit, logout, root redirect
pub mod login;

/// Provider redirect and callback
pub mod oauth;

/// Admin-credential setup
pub mod setup;

// Re-export handlers for route configuration
pub use login::{index, login_page, login_submit, logout};
pub use oauth::{oauth_callback, oauth_start};
pub use setup::setup;
