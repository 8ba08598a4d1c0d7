mod common;

use axum_test::TestServer;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_home_page_empty(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = response.text();
    assert!(html.contains("No shortened URLs yet."));
    assert!(html.contains("/api/shorten"));
}

#[sqlx::test]
async fn test_home_page_lists_links(pool: SqlitePool) {
    common::create_test_link(&pool, "abc12345", "https://example.com/docs").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let html = server.get("/").await.text();

    assert!(html.contains("abc12345"));
    assert!(html.contains("https://example.com/docs"));
    assert!(!html.contains("No shortened URLs yet."));
}

#[sqlx::test]
async fn test_home_page_truncates_long_urls(pool: SqlitePool) {
    let long_url = format!("https://example.com/{}", "x".repeat(100));
    common::create_test_link(&pool, "abc12345", &long_url).await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let html = server.get("/").await.text();

    let shown: String = long_url.chars().take(60).collect();
    assert!(html.contains(&format!("{shown}...")));
}
