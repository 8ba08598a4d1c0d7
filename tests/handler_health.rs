mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test]
async fn test_health_reports_link_count(pool: SqlitePool) {
    common::create_test_link(&pool, "aaaaaaaa", "https://a.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 1 links stored"
    );
}

#[sqlx::test]
async fn test_health_degraded_when_database_closed(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
