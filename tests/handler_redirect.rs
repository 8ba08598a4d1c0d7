mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_link(&pool, "abc12345", "https://example.com/page").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/abc12345").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[sqlx::test]
async fn test_redirect_after_shorten(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://www.rust-lang.org/learn" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_code"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://www.rust-lang.org/learn");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Short URL not found");
}

#[sqlx::test]
async fn test_redirect_code_is_case_sensitive(pool: SqlitePool) {
    common::create_test_link(&pool, "abc12345", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/ABC12345").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_keeps_non_ascii_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/caf\u{e9}" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let code = created.json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").as_bytes(),
        "https://example.com/caf\u{e9}".as_bytes()
    );
}
