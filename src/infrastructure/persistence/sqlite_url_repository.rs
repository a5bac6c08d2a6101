//! SQLite implementation of the URL repository.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::domain::repositories::UrlRepository;
use crate::error::StorageError;
use crate::utils::db_error::is_unique_violation;

/// SQLite repository for the alias to URL mapping.
///
/// A single pool is shared by all callers; SQLite's own locking plus the
/// pool's internal synchronization provide per-call serializability.
/// Alias uniqueness is delegated entirely to the `UNIQUE` constraint.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Creates a repository from an existing connection pool.
    ///
    /// The caller is responsible for running [`Self::init`] before use.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `storage_path`, creating the file if absent,
    /// and ensures the schema exists.
    pub async fn connect(
        storage_path: &str,
        max_connections: u32,
        busy_timeout: Duration,
    ) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(storage_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::database("connect", e))?;

        let repository = Self::new(pool);
        repository.init().await?;

        Ok(repository)
    }

    /// Ensures the `url` table and its alias index exist.
    ///
    /// Idempotent; safe to call on every process start.
    pub async fn init(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url (
                id    INTEGER PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url   TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::database("init table", e))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_url_alias ON url (alias)")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::database("init index", e))?;

        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(StorageError::UrlExists),
            Err(e) => Err(StorageError::database("save url", e)),
        }
    }

    async fn get(&self, alias: &str) -> Result<String, StorageError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::database("get url", e))?;

        url.ok_or(StorageError::UrlNotFound)
    }

    async fn delete(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::database("delete url", e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::UrlNotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::database("ping", e))?;

        Ok(())
    }
}
