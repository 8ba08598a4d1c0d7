//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Link service over a type-erased store, as used by the HTTP layer.
pub type SharedLinkService = LinkService<dyn LinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SharedLinkService>,
    /// Base URL shown on the home page; `None` derives it from the `Host` header.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(link_service: Arc<SharedLinkService>, public_base_url: Option<String>) -> Self {
        Self {
            link_service,
            public_base_url,
        }
    }

    /// Wires the SQLite repository and link service over an open pool.
    pub fn from_pool(pool: SqlitePool, public_base_url: Option<String>) -> Self {
        let link_repository: Arc<dyn LinkRepository> = Arc::new(SqliteLinkRepository::new(pool));
        let link_service = Arc::new(LinkService::new(link_repository));

        Self::new(link_service, public_base_url)
    }
}
