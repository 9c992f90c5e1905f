//! Entity Store Module
//!
//! This module defines the boundary to the external persistence engine and
//! the two record kinds it holds (User, Item).
//!
//! # Architecture
//!
//! The store module is organized into focused submodules:
//!
//! - **`users`** - User record type
//! - **`items`** - Item record type and mutable field set
//! - **`pg`** - PostgreSQL backend (sqlx)
//! - **`memory`** - In-memory backend (tests and database-less operation)
//!
//! # The `Store` Trait
//!
//! Handlers never talk to a concrete backend; they receive an
//! `Arc<dyn Store>` through application state. The trait deliberately
//! exposes find-or-create as a single operation so a first login from a new
//! external identity cannot create duplicate user records under concurrent
//! requests.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// User record type
pub mod users;

/// Item record type and field set
pub mod items;

/// PostgreSQL backend
pub mod pg;

/// In-memory backend
pub mod memory;

// Re-export commonly used types
pub use items::{Item, ItemFields};
pub use memory::MemStore;
pub use pg::PgStore;
pub use users::User;

/// Entity store failure
///
/// The server makes no distinction between transient and permanent store
/// failures; all of them surface as a generic 500-class response upstream.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Boundary interface to the persistence engine
///
/// One implementation wraps a PostgreSQL pool ([`PgStore`]); the other keeps
/// everything in process memory ([`MemStore`]). Both uphold the same
/// contracts:
///
/// - `find_or_create_oauth_user` is atomic per `(provider, subject)` pair
/// - `update_item` / `delete_item` report a missing id instead of silently
///   succeeding
/// - `list_items` matches case-insensitive substrings of title or author,
///   and an empty or absent search matches everything
#[async_trait]
pub trait Store: Send + Sync {
    /// Load a user by id. Returns `None` when the record does not exist.
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Load a local-credentials user by username.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Create or replace the local user with the given username.
    ///
    /// Used by the idempotent `/setup` route; repeated calls leave exactly
    /// one record for the username.
    async fn upsert_local_user(
        &self,
        username: &str,
        password_hash: &str,
        display_name: &str,
    ) -> Result<User, StoreError>;

    /// Resolve a provider-scoped external identity to a user, creating the
    /// record on first login.
    ///
    /// This is a single atomic store operation keyed on `(provider,
    /// subject)`; two concurrent first logins with the same identity resolve
    /// to the same record.
    async fn find_or_create_oauth_user(
        &self,
        provider: &str,
        subject: &str,
        display_name: &str,
        email: Option<&str>,
    ) -> Result<User, StoreError>;

    /// Insert a new catalog item.
    async fn insert_item(&self, fields: ItemFields) -> Result<Item, StoreError>;

    /// List items, optionally filtered by a case-insensitive substring match
    /// over title or author. No pagination, natural store order.
    async fn list_items(&self, search: Option<&str>) -> Result<Vec<Item>, StoreError>;

    /// Load a single item by id.
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, StoreError>;

    /// Update an item's fields in place. Returns the updated record, or
    /// `None` when the id does not exist.
    async fn update_item(&self, id: Uuid, fields: ItemFields) -> Result<Option<Item>, StoreError>;

    /// Delete an item. Returns `false` when the id does not exist.
    async fn delete_item(&self, id: Uuid) -> Result<bool, StoreError>;
}
