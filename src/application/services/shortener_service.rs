//! Short URL creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::code_generator::CodeGenerator;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{InsertError, ShortUrlRepository};
use crate::error::AppError;

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Outcome of [`ShortenerService::shorten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortened {
    /// The long URL was already mapped; the existing mapping is returned.
    Found(ShortUrl),
    /// A new mapping was stored.
    Created(ShortUrl),
}

impl Shortened {
    pub fn is_created(&self) -> bool {
        matches!(self, Shortened::Created(_))
    }

    pub fn short_url(&self) -> &ShortUrl {
        match self {
            Shortened::Found(short_url) | Shortened::Created(short_url) => short_url,
        }
    }

    pub fn into_short_url(self) -> ShortUrl {
        match self {
            Shortened::Found(short_url) | Shortened::Created(short_url) => short_url,
        }
    }
}

/// Service for creating and resolving short URLs.
///
/// The store and the code generator are injected, so tests can substitute an
/// in-memory store or a scripted generator.
pub struct ShortenerService {
    repository: Arc<dyn ShortUrlRepository>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl ShortenerService {
    /// Creates a new service. `max_attempts` is raised to at least 1.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns the mapping for `long_url`, creating it if needed.
    ///
    /// # Deduplication
    ///
    /// A long URL maps to at most one short code. If a mapping exists (exact
    /// byte match, no normalization) it is returned as [`Shortened::Found`].
    /// A concurrent request that stores the same URL first also yields `Found`.
    ///
    /// # Code Allocation
    ///
    /// Draws candidates from the generator, skipping codes that already
    /// exist. The insert itself re-checks uniqueness, so a code taken between
    /// the check and the insert just costs one attempt.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingField`] if `long_url` is absent or empty
    /// - [`AppError::CodeSpaceExhausted`] if every attempt collided
    /// - [`AppError::Internal`] on store errors
    pub async fn shorten(&self, long_url: Option<String>) -> Result<Shortened, AppError> {
        let long_url = match long_url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(AppError::missing_field("long_url")),
        };

        if let Some(existing) = self.repository.find_by_long_url(&long_url).await? {
            debug!(short_code = %existing.short_code, "Long URL already shortened");
            return Ok(Shortened::Found(existing));
        }

        for attempt in 1..=self.max_attempts {
            let short_code = self.generator.generate();

            if self.repository.exists_by_short_code(&short_code).await? {
                debug!(attempt, %short_code, "Short code collision");
                continue;
            }

            match self
                .repository
                .insert(NewShortUrl::new(long_url.clone(), short_code))
                .await
            {
                Ok(created) => {
                    info!(id = created.id, short_code = %created.short_code, "Short URL created");
                    return Ok(Shortened::Created(created));
                }
                Err(InsertError::ShortCodeTaken) => {
                    debug!(attempt, "Short code taken concurrently");
                }
                Err(InsertError::LongUrlTaken) => {
                    debug!("Long URL shortened concurrently");
                    return self.existing_after_conflict(&long_url).await;
                }
                Err(InsertError::Store(e)) => return Err(e),
            }
        }

        warn!(
            attempts = self.max_attempts,
            "Failed to allocate a unique short code"
        );
        Err(AppError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Looks up the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, short_code: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
            })
    }

    /// Checks that the backing store is reachable.
    pub async fn ping_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn existing_after_conflict(&self, long_url: &str) -> Result<Shortened, AppError> {
        self.repository
            .find_by_long_url(long_url)
            .await?
            .map(Shortened::Found)
            .ok_or_else(|| {
                AppError::internal(
                    "Long URL conflict without an existing mapping",
                    json!({}),
                )
            })
    }
}
