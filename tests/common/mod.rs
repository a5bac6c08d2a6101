#![allow(dead_code)]

use std::sync::Arc;

use linkshort::application::services::UrlService;
use linkshort::infrastructure::persistence::SqliteUrlRepository;
use linkshort::state::AppState;
use sqlx::SqlitePool;

pub const BASE_URL: &str = "http://localhost:3000";

/// Builds application state over the given pool, ensuring the schema exists.
pub async fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = SqliteUrlRepository::new(pool);
    repository.init().await.unwrap();

    let url_service = Arc::new(UrlService::new(Arc::new(repository), BASE_URL.to_string()));

    AppState::new(url_service)
}

/// Inserts a record directly, returning its id. The schema must already
/// exist (see [`create_test_state`]).
pub async fn insert_url(pool: &SqlitePool, alias: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
        .bind(url)
        .bind(alias)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

/// Counts the records stored under `alias`.
pub async fn count_alias(pool: &SqlitePool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = ?")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}
