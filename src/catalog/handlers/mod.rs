//! Catalog Handlers
//!
//! Two handler families over the same store operations:
//!
//! - **`pages`** - session-gated, server-rendered HTML
//! - **`api`** - ungated JSON REST
//!
//! Both standardize the not-found policy: a missing item id always yields
//! an explicit 404, never a silent no-op.

/// Session-gated page handlers
pub mod pages;

/// Ungated JSON API handlers
pub mod api;

// Re-export handlers for route configuration
pub use api::{api_create, api_delete, api_list, api_update};
pub use pages::{create_form, create_submit, delete_submit, edit_form, list, update_submit};
