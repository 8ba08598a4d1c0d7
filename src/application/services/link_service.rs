//! Link creation, resolution and listing service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, HashCodeGenerator, salted_input};
use crate::utils::url_validator::is_valid_url;
use serde_json::json;

/// Message returned when the request carries no URL at all.
pub const URL_REQUIRED_MESSAGE: &str = "URL is required";

/// Message returned when the URL fails validation.
pub const INVALID_URL_MESSAGE: &str = "Invalid or unavailable URL";

/// Message returned when a short code does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Maximum number of codes tried for a single URL before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortened {
    /// A new record was stored.
    Created(Link),
    /// The URL was already shortened; the stored record is returned unchanged.
    Existing(Link),
}

impl Shortened {
    /// The stored record, new or existing.
    pub fn link(&self) -> &Link {
        match self {
            Shortened::Created(link) | Shortened::Existing(link) => link,
        }
    }

    /// Consumes the outcome, returning the stored record.
    pub fn into_link(self) -> Link {
        match self {
            Shortened::Created(link) | Shortened::Existing(link) => link,
        }
    }

    /// `true` if this call stored a new record.
    pub fn is_created(&self) -> bool {
        matches!(self, Shortened::Created(_))
    }
}

/// Service for creating and retrieving shortened links.
///
/// Owns no state beyond its collaborators: the store handle is injected at
/// construction and the code generator is stateless. Generic over the
/// repository so the HTTP layer can run on `dyn LinkRepository` while tests
/// use mocks or a concrete store.
pub struct LinkService<L: LinkRepository + ?Sized, G: CodeGenerator = HashCodeGenerator> {
    link_repository: Arc<L>,
    generator: G,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a link service using the default fingerprint generator.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_generator(link_repository, HashCodeGenerator)
    }
}

impl<L: LinkRepository + ?Sized, G: CodeGenerator> LinkService<L, G> {
    /// Creates a link service with a custom code generator.
    pub fn with_generator(link_repository: Arc<L>, generator: G) -> Self {
        Self {
            link_repository,
            generator,
        }
    }

    /// Shortens a URL.
    ///
    /// # Flow
    ///
    /// 1. `None` or an empty string is rejected with [`URL_REQUIRED_MESSAGE`]
    /// 2. The URL is trimmed and validated, else [`INVALID_URL_MESSAGE`]
    /// 3. If the exact trimmed URL is already stored, that record is returned
    /// 4. Otherwise a code is generated and inserted. When the store reports a
    ///    uniqueness violation, the URL is looked up again (a concurrent
    ///    request may have stored it first) and, if still absent, a new code
    ///    is derived from the URL plus a nonce. At most [`MAX_CODE_ATTEMPTS`]
    ///    codes are tried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing or invalid URLs.
    ///
    /// Returns [`AppError::Internal`] if every attempt collided or the store
    /// failed.
    pub async fn shorten(&self, url: Option<&str>) -> Result<Shortened, AppError> {
        let raw = url
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| AppError::bad_request(URL_REQUIRED_MESSAGE, json!({})))?;

        let url = raw.trim();
        if !is_valid_url(url) {
            return Err(AppError::bad_request(INVALID_URL_MESSAGE, json!({})));
        }

        if let Some(existing) = self.link_repository.find_by_original_url(url).await? {
            tracing::debug!(code = %existing.short_code, "URL already shortened");
            return Ok(Shortened::Existing(existing));
        }

        for attempt in 0..MAX_CODE_ATTEMPTS {
            let short_code = self.candidate_code(url, attempt);
            let new_link = NewLink {
                original_url: url.to_string(),
                short_code,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    tracing::info!(code = %link.short_code, id = link.id, "Short link created");
                    return Ok(Shortened::Created(link));
                }
                Err(AppError::Conflict { .. }) => {
                    if let Some(existing) = self.link_repository.find_by_original_url(url).await?
                    {
                        tracing::debug!(
                            code = %existing.short_code,
                            "URL stored by a concurrent request"
                        );
                        return Ok(Shortened::Existing(existing));
                    }

                    tracing::warn!(attempt, "Short code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_CODE_ATTEMPTS,
            "Failed to find a free short code"
        );

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with [`NOT_FOUND_MESSAGE`] if no link
    /// has this exact code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE, json!({ "code": code })))
    }

    /// Returns every link, newest first.
    pub async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Returns the number of stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// First attempt fingerprints the bare URL; retries salt it.
    fn candidate_code(&self, url: &str, attempt: usize) -> String {
        if attempt == 0 {
            self.generator.generate(url)
        } else {
            self.generator.generate(&salted_input(url, attempt))
        }
    }
}
