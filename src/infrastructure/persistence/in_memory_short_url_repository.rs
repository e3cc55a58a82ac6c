//! In-process implementation of the short URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{InsertError, ShortUrlRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    by_code: HashMap<String, ShortUrl>,
    /// long_url -> short_code
    by_long_url: HashMap<String, String>,
    last_id: i64,
}

/// Non-durable repository holding every mapping in memory.
///
/// Both indexes live behind one lock, so [`ShortUrlRepository::insert`]
/// checks and writes atomically, like the unique constraints of the SQL store.
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShortUrlRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.tables.read().await.by_code.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortUrl>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .by_long_url
            .get(long_url)
            .and_then(|code| tables.by_code.get(code))
            .cloned())
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.tables.read().await.by_code.get(short_code).cloned())
    }

    async fn exists_by_short_code(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.tables.read().await.by_code.contains_key(short_code))
    }

    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, InsertError> {
        let mut tables = self.tables.write().await;

        if tables.by_code.contains_key(&new_short_url.short_code) {
            return Err(InsertError::ShortCodeTaken);
        }
        if tables.by_long_url.contains_key(&new_short_url.long_url) {
            return Err(InsertError::LongUrlTaken);
        }

        tables.last_id += 1;
        let short_url = ShortUrl::new(
            tables.last_id,
            new_short_url.long_url,
            new_short_url.short_code,
        );

        tables
            .by_long_url
            .insert(short_url.long_url.clone(), short_url.short_code.clone());
        tables
            .by_code
            .insert(short_url.short_code.clone(), short_url.clone());

        Ok(short_url)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
