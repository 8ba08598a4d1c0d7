//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries, plus pool construction and embedded migrations.
//!
//! # Contents
//!
//! - [`pool`] - Connection pool setup and migrations
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod pool;
pub mod sqlite_link_repository;

pub use pool::{connect, migrate};
pub use sqlite_link_repository::SqliteLinkRepository;
