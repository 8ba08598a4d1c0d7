mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_url_success(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["original_url"], "https://example.com");
    assert!(json["created_at"].is_string());

    let code = json["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[sqlx::test]
async fn test_shorten_deduplication(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.com" }))
        .await;
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://dedup.com" }))
        .await;

    first.assert_status(StatusCode::CREATED);
    second.assert_status(StatusCode::CREATED);

    let json1 = first.json::<serde_json::Value>();
    let json2 = second.json::<serde_json::Value>();
    assert_eq!(json1, json2);
}

#[sqlx::test]
async fn test_shorten_trims_whitespace(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let padded = server
        .post("/api/shorten")
        .json(&json!({ "url": "  https://example.com/trim  " }))
        .await;
    padded.assert_status(StatusCode::CREATED);
    let padded = padded.json::<serde_json::Value>();
    assert_eq!(padded["original_url"], "https://example.com/trim");

    let plain = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/trim" }))
        .await
        .json::<serde_json::Value>();
    assert_eq!(plain["id"], padded["id"]);
}

#[sqlx::test]
async fn test_shorten_distinct_urls_get_distinct_codes(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let a = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://a.com" }))
        .await
        .json::<serde_json::Value>();
    let b = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://b.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(a["short_code"], b["short_code"]);
}

#[sqlx::test]
async fn test_shorten_empty_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "URL is required");
}

#[sqlx::test]
async fn test_shorten_missing_url_field(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "URL is required");
}

#[sqlx::test]
async fn test_shorten_null_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": null }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "URL is required");
}

#[sqlx::test]
async fn test_shorten_without_body(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.post("/api/shorten").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "URL is required");
}

#[sqlx::test]
async fn test_shorten_whitespace_only_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Invalid or unavailable URL");
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    for url in ["not-a-valid-url", "ftp://example.com", "https://", "http://example"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["message"], "Invalid or unavailable URL", "url: {url}");
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_shorten_non_string_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": 42 }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Invalid or unavailable URL");
}

#[sqlx::test]
async fn test_shorten_too_long_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();
    let url = format!("https://example.com/{}", "a".repeat(2048));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_shorten_rejects_control_characters(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    for url in ["https://example.com/a\u{1}b", "https://example.com/a\u{7f}b"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["message"], "Invalid or unavailable URL");
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
