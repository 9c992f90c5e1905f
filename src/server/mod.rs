//! Server Module
//!
//! Server initialization, application state, and configuration:
//!
//! - **`config`** - Environment-driven configuration and store loading
//! - **`state`** - `AppState` and `FromRef` sub-state extraction
//! - **`init`** - Application assembly (`create_app`)

/// Environment-driven configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
