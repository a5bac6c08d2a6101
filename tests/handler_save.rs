mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use linkshort::api::handlers::save_handler;
use serde_json::json;
use sqlx::SqlitePool;

async fn test_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool).await;
    let app = Router::new()
        .route("/api/url", post(save_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_save_with_custom_alias(pool: SqlitePool) {
    let server = test_server(pool).await;

    let response = server
        .post("/api/url")
        .json(&json!({
            "url": "https://example.com",
            "alias": "ex1"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert!(json["id"].as_i64().unwrap() >= 1);
    assert_eq!(json["alias"], "ex1");
    assert_eq!(json["short_url"], format!("{}/ex1", common::BASE_URL));
}

#[sqlx::test]
async fn test_save_generates_alias_when_missing(pool: SqlitePool) {
    let server = test_server(pool).await;

    let response = server
        .post("/api/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[sqlx::test]
async fn test_save_duplicate_alias_conflicts(pool: SqlitePool) {
    let server = test_server(pool).await;

    let first = server
        .post("/api/url")
        .json(&json!({
            "url": "https://example.com",
            "alias": "taken"
        }))
        .await;
    assert_eq!(first.status_code(), 201);

    let second = server
        .post("/api/url")
        .json(&json!({
            "url": "https://other.com",
            "alias": "taken"
        }))
        .await;

    assert_eq!(second.status_code(), 409);

    let json = second.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_save_rejects_invalid_url(pool: SqlitePool) {
    let server = test_server(pool).await;

    let response = server
        .post("/api/url")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_save_rejects_invalid_alias_characters(pool: SqlitePool) {
    let server = test_server(pool).await;

    let response = server
        .post("/api/url")
        .json(&json!({
            "url": "https://example.com",
            "alias": "bad alias!"
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_save_rejects_too_short_alias(pool: SqlitePool) {
    let server = test_server(pool).await;

    let response = server
        .post("/api/url")
        .json(&json!({
            "url": "https://example.com",
            "alias": "ab"
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_save_rejects_reserved_alias(pool: SqlitePool) {
    let server = test_server(pool).await;

    let response = server
        .post("/api/url")
        .json(&json!({
            "url": "https://example.com",
            "alias": "health"
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_save_aliases_are_case_sensitive(pool: SqlitePool) {
    let server = test_server(pool).await;

    let lower = server
        .post("/api/url")
        .json(&json!({
            "url": "https://example.com/lower",
            "alias": "case"
        }))
        .await;
    assert_eq!(lower.status_code(), 201);

    let upper = server
        .post("/api/url")
        .json(&json!({
            "url": "https://example.com/upper",
            "alias": "CASE"
        }))
        .await;
    assert_eq!(upper.status_code(), 201);
}
