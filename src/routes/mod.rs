//! Routes Module
//!
//! HTTP route configuration:
//!
//! - **`router`** - Assembles the page, API, and auth routes into the
//!   application router and applies the session middleware layers

/// Router assembly
pub mod router;

pub use router::create_router;
