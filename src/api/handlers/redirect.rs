//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `307 Temporary Redirect`, so browsers re-issue the same
/// method against the original URL and do not cache the mapping permanently.
///
/// # Errors
///
/// Returns 404 `{"message": "Short URL not found"}` if the code was never issued.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve(&code).await?;

    tracing::debug!(code = %code, "Redirecting");

    Ok(Redirect::temporary(&link.original_url))
}
