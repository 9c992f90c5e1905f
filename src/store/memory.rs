/**
 * In-Memory Store Backend
 *
 * This module implements the `Store` trait over process memory. It backs
 * the test suite and lets the server run without a configured database
 * (catalog contents then live only as long as the process).
 *
 * # Concurrency
 *
 * All state sits behind a single `tokio::sync::RwLock`. Find-or-create for
 * external identities runs entirely under the write lock, so two concurrent
 * first logins with the same identity resolve to one record, matching the
 * uniqueness constraint the PostgreSQL backend gets from its schema.
 */

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::items::{Item, ItemFields};
use crate::store::users::User;
use crate::store::{Store, StoreError};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    items: Vec<Item>,
}

/// Memory-backed entity store
///
/// Items keep insertion order, which stands in for the external store's
/// natural order.
#[derive(Default)]
pub struct MemStore {
    tables: RwLock<Tables>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of user records. Test hook for duplicate-login checks.
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Drop a user record. Test hook for exercising stale sessions; the
    /// application itself never deletes users.
    pub async fn remove_user(&self, id: Uuid) {
        self.tables.write().await.users.retain(|u| u.id != id);
    }
}

#[async_trait]
impl Store for MemStore {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.username.as_deref() == Some(username))
            .cloned())
    }

    async fn upsert_local_user(
        &self,
        username: &str,
        password_hash: &str,
        display_name: &str,
    ) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if let Some(user) = tables
            .users
            .iter_mut()
            .find(|u| u.username.as_deref() == Some(username))
        {
            user.password_hash = Some(password_hash.to_string());
            user.display_name = display_name.to_string();
            return Ok(user.clone());
        }

        let user = User {
            id: Uuid::new_v4(),
            username: Some(username.to_string()),
            provider: None,
            subject: None,
            display_name: display_name.to_string(),
            email: None,
            password_hash: Some(password_hash.to_string()),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_or_create_oauth_user(
        &self,
        provider: &str,
        subject: &str,
        display_name: &str,
        email: Option<&str>,
    ) -> Result<User, StoreError> {
        // Lookup and insert happen under one write lock.
        let mut tables = self.tables.write().await;

        if let Some(user) = tables.users.iter().find(|u| {
            u.provider.as_deref() == Some(provider) && u.subject.as_deref() == Some(subject)
        }) {
            return Ok(user.clone());
        }

        let user = User {
            id: Uuid::new_v4(),
            username: None,
            provider: Some(provider.to_string()),
            subject: Some(subject.to_string()),
            display_name: display_name.to_string(),
            email: email.map(str::to_string),
            password_hash: None,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn insert_item(&self, fields: ItemFields) -> Result<Item, StoreError> {
        let item = Item::new(fields);
        self.tables.write().await.items.push(item.clone());
        Ok(item)
    }

    async fn list_items(&self, search: Option<&str>) -> Result<Vec<Item>, StoreError> {
        let tables = self.tables.read().await;
        let search = search.unwrap_or("");
        Ok(tables
            .items
            .iter()
            .filter(|item| item.matches(search))
            .cloned()
            .collect())
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.items.iter().find(|i| i.id == id).cloned())
    }

    async fn update_item(&self, id: Uuid, fields: ItemFields) -> Result<Option<Item>, StoreError> {
        let mut tables = self.tables.write().await;
        match tables.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.title = fields.title;
                item.author = fields.author;
                item.isbn = fields.isbn;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.items.len();
        tables.items.retain(|i| i.id != id);
        Ok(tables.items.len() < before)
    }
}
