//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::home_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - API documentation and list of shortened URLs
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
