mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkshort::api::handlers::redirect_handler;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::insert_url(&pool, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let state = common::create_test_state(pool).await;
    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
