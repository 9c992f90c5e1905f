/**
 * PostgreSQL Store Backend
 *
 * This module implements the `Store` trait on top of a sqlx connection
 * pool. Queries are plain runtime `query_as` calls; the schema lives in the
 * embedded migrations (see `migrations/`).
 *
 * # Concurrency
 *
 * `find_or_create_oauth_user` and `upsert_local_user` are single
 * `INSERT ... ON CONFLICT` statements, so the uniqueness constraints on
 * `username` and `(provider, subject)` make them atomic. There are no
 * retries and no timeouts beyond the pool defaults; a failed statement
 * surfaces as `StoreError::Database`.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::items::{Item, ItemFields};
use crate::store::users::User;
use crate::store::{Store, StoreError};

const USER_COLUMNS: &str =
    "id, username, provider, subject, display_name, email, password_hash, created_at";

/// PostgreSQL-backed entity store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and run pending migrations.
    ///
    /// Migration failures are logged but do not abort startup; they usually
    /// mean the schema is already in place.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        match sqlx::migrate!().run(&pool).await {
            Ok(_) => tracing::info!("Database migrations completed successfully"),
            Err(e) => {
                tracing::error!("Failed to run database migrations: {:?}", e);
                tracing::warn!("Continuing without migrations - database might not be up to date");
            }
        }

        Ok(Self { pool })
    }

    /// Wrap an existing pool without running migrations.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turn a raw search string into an ILIKE pattern matching it as a literal
/// substring.
fn substring_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl Store for PgStore {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn upsert_local_user(
        &self,
        username: &str,
        password_hash: &str,
        display_name: &str,
    ) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, username, display_name, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (username) DO UPDATE
                SET password_hash = EXCLUDED.password_hash,
                    display_name = EXCLUDED.display_name
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(display_name)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_or_create_oauth_user(
        &self,
        provider: &str,
        subject: &str,
        display_name: &str,
        email: Option<&str>,
    ) -> Result<User, StoreError> {
        // The no-op DO UPDATE makes RETURNING yield the existing row on
        // conflict, so first and repeat logins take the same single
        // statement.
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, provider, subject, display_name, email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (provider, subject) DO UPDATE
                SET provider = EXCLUDED.provider
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(provider)
        .bind(subject)
        .bind(display_name)
        .bind(email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_item(&self, fields: ItemFields) -> Result<Item, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (id, title, author, isbn, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, isbn, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.isbn)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn list_items(&self, search: Option<&str>) -> Result<Vec<Item>, StoreError> {
        let items = match search.filter(|s| !s.is_empty()) {
            Some(search) => {
                sqlx::query_as::<_, Item>(
                    r#"
                    SELECT id, title, author, isbn, created_at FROM items
                    WHERE title ILIKE $1 OR author ILIKE $1
                    ORDER BY created_at
                    "#,
                )
                .bind(substring_pattern(search))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Item>(
                    "SELECT id, title, author, isbn, created_at FROM items ORDER BY created_at",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(items)
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, title, author, isbn, created_at FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn update_item(&self, id: Uuid, fields: ItemFields) -> Result<Option<Item>, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET title = $1, author = $2, isbn = $3
            WHERE id = $4
            RETURNING id, title, author, isbn, created_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.isbn)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
