//! Repository trait for short URL mappings.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Why an insert was rejected.
///
/// The two uniqueness variants are expected under concurrent creates and are
/// handled by [`crate::application::services::ShortenerService`]; only
/// [`InsertError::Store`] reaches the client.
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// Another mapping already uses this short code.
    #[error("short code already taken")]
    ShortCodeTaken,

    /// Another mapping already exists for this long URL.
    #[error("long url already mapped")]
    LongUrlTaken,

    #[error(transparent)]
    Store(#[from] AppError),
}

/// Durable mapping store.
///
/// Enforces uniqueness of `short_code` and of `long_url`. Both rules are
/// checked by [`ShortUrlRepository::insert`] itself, so a lookup followed by an
/// insert is safe even when another request inserts in between.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Finds the mapping for an exact long URL (no normalization).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Returns true if a mapping with this short code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn exists_by_short_code(&self, short_code: &str) -> Result<bool, AppError>;

    /// Inserts a new mapping in a single atomic operation.
    ///
    /// # Errors
    ///
    /// - [`InsertError::ShortCodeTaken`] if the short code is in use
    /// - [`InsertError::LongUrlTaken`] if the long URL is already mapped
    /// - [`InsertError::Store`] on any other store error
    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, InsertError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
