//! Bookrack - Main Library
//!
//! Bookrack is a small book-catalog web application: session-based login
//! (local credentials or a third-party identity provider), server-rendered
//! CRUD pages for catalog items, and a parallel JSON REST API for the same
//! records.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - Entity store boundary (PostgreSQL and in-memory backends)
//! - **`auth`** - Identity verification, session tokens, login handlers
//! - **`catalog`** - Item handlers (pages and API) and HTML views
//! - **`middleware`** - Session resolution and the page authorization gate
//! - **`error`** - Application error types
//!
//! # Request Flow
//!
//! Inbound request → session middleware resolves the principal from the
//! session cookie → the authorization gate allows or redirects → the handler
//! performs at most one store call → the response is rendered or serialized.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Entity store boundary and backends
pub mod store;

/// Authentication, sessions, and identity providers
pub mod auth;

/// Catalog item handlers and views
pub mod catalog;

/// Middleware for request processing
pub mod middleware;

/// Application error types
pub mod error;

// Re-export commonly used types
pub use error::AppError;
pub use server::state::AppState;
pub use store::Store;
