//! Short URL entity: the mapping between a short code and a long URL.

/// A persisted short code to long URL mapping.
///
/// `long_url` is kept exactly as the caller supplied it; redirects use it
/// verbatim. Mappings are never updated once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(id: i64, long_url: String, short_code: String) -> Self {
        Self {
            id,
            long_url,
            short_code,
        }
    }
}

/// Input data for inserting a new mapping. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub long_url: String,
    pub short_code: String,
}

impl NewShortUrl {
    pub fn new(long_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            short_code: short_code.into(),
        }
    }
}
