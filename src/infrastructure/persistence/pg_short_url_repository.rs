//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{InsertError, ShortUrlRepository};
use crate::error::AppError;
use crate::utils::db_error::{UniqueViolation, unique_violation};

#[derive(Debug, FromRow)]
struct ShortUrlRow {
    id: i64,
    long_url: String,
    short_code: String,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrl::new(row.id, row.long_url, row.short_code)
    }
}

/// PostgreSQL repository for short URL mappings.
///
/// Uniqueness of `short_code` and `long_url` is enforced by the schema (see
/// `migrations/`); [`ShortUrlRepository::insert`] maps the violated
/// constraint to an [`InsertError`] variant.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortUrl>, AppError> {
        // md5() comparison lets the planner use the unique index.
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, long_url, short_code
            FROM short_urls
            WHERE md5(long_url) = md5($1) AND long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            SELECT id, long_url, short_code
            FROM short_urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn exists_by_short_code(&self, short_code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM short_urls WHERE short_code = $1)",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, InsertError> {
        let result = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (long_url, short_code)
            VALUES ($1, $2)
            RETURNING id, long_url, short_code
            "#,
        )
        .bind(&new_short_url.long_url)
        .bind(&new_short_url.short_code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) => match unique_violation(&e) {
                Some(UniqueViolation::ShortCode) => Err(InsertError::ShortCodeTaken),
                Some(UniqueViolation::LongUrl) => Err(InsertError::LongUrlTaken),
                Some(UniqueViolation::Other) | None => Err(InsertError::Store(e.into())),
            },
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
