//! DTOs for link shortening and listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// `url` is kept as a raw JSON value so that a missing field, `null`, and a
/// non-string value can be told apart and reported with the right message.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<Value>,
}

/// JSON representation of a stored link.
///
/// ```json
/// {
///   "id": 1,
///   "original_url": "https://example.com",
///   "short_code": "100680ad",
///   "created_at": "2024-01-15T10:30:00.123456Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            created_at: link.created_at,
        }
    }
}
