//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap};

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::request_base_url;

/// Original URLs longer than this are shortened for display.
const DISPLAY_URL_CHARS: usize = 60;

/// One row of the links table.
pub struct HomeLink {
    pub short_code: String,
    pub original_url: String,
    pub display_url: String,
    pub short_url: String,
}

impl HomeLink {
    fn new(link: Link, base_url: &str) -> Self {
        Self {
            short_url: format!("{}/{}", base_url, link.short_code),
            display_url: truncate_for_display(&link.original_url),
            short_code: link.short_code,
            original_url: link.original_url,
        }
    }
}

/// Template for the home page.
///
/// Renders `templates/home.html`: the endpoint reference followed by every
/// stored link, newest first.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub base_url: String,
    pub links: Vec<HomeLink>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<HomeTemplate, AppError> {
    let base_url = request_base_url(state.public_base_url.as_deref(), &headers);

    let links = state
        .link_service
        .list_all()
        .await?
        .into_iter()
        .map(|link| HomeLink::new(link, &base_url))
        .collect();

    Ok(HomeTemplate { base_url, links })
}

fn truncate_for_display(url: &str) -> String {
    if url.chars().count() <= DISPLAY_URL_CHARS {
        return url.to_string();
    }

    let mut shown: String = url.chars().take(DISPLAY_URL_CHARS).collect();
    shown.push_str("...");
    shown
}
