//! Catalog Module
//!
//! Everything around the Item entity's HTTP surface:
//!
//! - **`handlers`** - Page handlers (session-gated HTML) and API handlers
//!   (ungated JSON) over the same store operations
//! - **`views`** - Inline HTML rendering for the page family
//!
//! The two handler families translate each request into at most one store
//! call. The page family sits behind the authorization gate; the API
//! family deliberately does not.

/// Page and API handlers
pub mod handlers;

/// HTML rendering
pub mod views;
