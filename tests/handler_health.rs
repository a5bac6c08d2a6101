mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkshort::api::handlers::health_handler;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_reports_healthy(pool: SqlitePool) {
    let state = common::create_test_state(pool).await;
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json["version"].is_string());
}
