//! Handler for the link listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every shortened URL, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 2,
///     "original_url": "https://b.com",
///     "short_code": "6f2a4a0b",
///     "created_at": "2024-01-15T10:30:01Z"
///   }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_all().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
