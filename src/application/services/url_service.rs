//! URL saving, resolution and deletion service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, StorageError};
use crate::utils::alias_generator::{generate_alias, is_reserved_alias};

/// Service for saving, resolving and deleting shortened URLs.
///
/// Uniqueness is never pre-checked: the store's constraint decides, and the
/// service reacts to the resulting conflict. For generated aliases a conflict
/// means a collision and triggers a retry with a fresh alias; for
/// caller-chosen aliases it is surfaced as-is.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Saves a URL under the caller's alias, or under a generated one when
    /// no alias is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the alias is reserved for a
    /// system endpoint.
    ///
    /// Returns [`AppError::Conflict`] if the caller-chosen alias is taken.
    ///
    /// Returns [`AppError::Internal`] on storage failures, or when alias
    /// generation keeps colliding.
    pub async fn save_url(
        &self,
        url: String,
        alias: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        let Some(alias) = alias else {
            return self.save_with_generated_alias(url).await;
        };

        if is_reserved_alias(&alias) {
            return Err(AppError::bad_request(
                "This alias is reserved",
                json!({ "alias": alias }),
            ));
        }

        match self.repository.save(&url, &alias).await {
            Ok(id) => Ok(UrlRecord { id, alias, url }),
            Err(StorageError::UrlExists) => Err(AppError::conflict(
                "Alias already exists",
                json!({ "alias": alias }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the alias.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        match self.repository.get(alias).await {
            Ok(url) => Ok(url),
            Err(StorageError::UrlNotFound) => Err(AppError::not_found(
                "Short link not found",
                json!({ "alias": alias }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the alias.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        match self.repository.delete(alias).await {
            Ok(()) => Ok(()),
            Err(StorageError::UrlNotFound) => Err(AppError::not_found(
                "Short link not found",
                json!({ "alias": alias }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Constructs the full short URL for an alias.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), alias)
    }

    /// Probes the storage backend.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await.map_err(Into::into)
    }

    /// Saves under a generated alias, retrying on collision.
    ///
    /// Attempts up to 10 times before failing.
    async fn save_with_generated_alias(&self, url: String) -> Result<UrlRecord, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let alias = generate_alias();

            match self.repository.save(&url, &alias).await {
                Ok(id) => return Ok(UrlRecord { id, alias, url }),
                Err(StorageError::UrlExists) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
