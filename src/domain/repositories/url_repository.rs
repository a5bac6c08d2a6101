//! Repository trait for the alias to URL mapping.

use crate::error::StorageError;
use async_trait::async_trait;

/// Repository interface for the durable alias to URL mapping.
///
/// Uniqueness of aliases is enforced by the backing engine's constraint
/// mechanism, atomically at insert time. No operation retries internally;
/// failures surface immediately to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlExists`] if the alias is already taken.
    /// Returns [`StorageError::Database`] on any other engine failure.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if no record matches.
    /// Returns [`StorageError::Database`] on any other engine failure.
    async fn get(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the record stored under `alias`.
    ///
    /// Zero affected rows is reported as not-found rather than relying on
    /// the engine to surface an error for a no-op delete.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UrlNotFound`] if no record matches.
    /// Returns [`StorageError::Database`] on any other engine failure.
    async fn delete(&self, alias: &str) -> Result<(), StorageError>;

    /// Lightweight connectivity probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StorageError>;
}
