//! Application Error Module
//!
//! This module defines the error types used by HTTP handlers and the
//! conversions that turn them into HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions
//! - **`conversion`** - Error conversion implementations (IntoResponse, etc.)
//!
//! # HTTP Response Conversion
//!
//! `AppError` implements `IntoResponse` from Axum, allowing handlers to
//! return it directly. Errors are serialized as a flat JSON body:
//!
//! ```json
//! { "error": "not found", "status": 404 }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AppError;
