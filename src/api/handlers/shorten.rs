//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::application::services::link_service::INVALID_URL_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record. Submitting a URL that is already
/// shortened returns the existing record, also with `201`.
///
/// # Errors
///
/// - `400` `{"message": "URL is required"}` when the body is absent or
///   unreadable, or `url` is missing, `null` or empty
/// - `400` `{"message": "Invalid or unavailable URL"}` when `url` is not a
///   string or fails validation
/// - `500` when no free code could be found or the store failed
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable shorten request body");
            ShortenRequest::default()
        }
    };

    let url = match request.url {
        None | Some(Value::Null) => None,
        Some(Value::String(url)) => Some(url),
        Some(other) => {
            return Err(AppError::bad_request(
                INVALID_URL_MESSAGE,
                json!({ "reason": format!("expected a string, got {}", json_type(&other)) }),
            ));
        }
    };

    let shortened = state.link_service.shorten(url.as_deref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from(shortened.into_link())),
    ))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
