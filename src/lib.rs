//! # shorten-url
//!
//! A URL shortener that maps long URLs to deterministic 8-character codes and
//! redirects those codes back, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity and the link store contract
//! - **Application Layer** ([`application`]) - Shorten/resolve/list orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML documentation page
//!
//! ## Short Codes
//!
//! A code is the first 8 hex characters of the SHA-256 digest of the URL, so
//! shortening the same URL always proposes the same code. Collisions are
//! detected by the store's unique index and resolved by re-hashing the URL with
//! a nonce, up to 10 attempts.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shorten_url.db"
//! cargo run
//!
//! curl -X POST localhost:8000/api/shorten -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, Shortened};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
