#![allow(dead_code)]

use axum::Router;
use axum::routing::{get, post};
use chrono::{DateTime, Utc};
use shorten_url::api::handlers::{
    health_handler, list_links_handler, redirect_handler, shorten_handler,
};
use shorten_url::state::AppState;
use shorten_url::web::handlers::home_handler;
use sqlx::SqlitePool;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::from_pool(pool, None)
}

/// Router with every public endpoint, without the path normalization wrapper.
pub fn create_test_app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/urls", get(list_links_handler))
        .with_state(create_test_state(pool))
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    create_test_link_at(pool, code, url, Utc::now()).await
}

pub async fn create_test_link_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (original_url, short_code, created_at) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}
