//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;
use crate::utils::validation::no_control_characters;

/// Request to shorten a long URL.
///
/// `long_url` is optional at the serde level so a missing field can be
/// reported with a dedicated message. Any other field, including
/// `short_code`, is ignored: codes are always assigned by the server.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(
        length(max = 2048, message = "must be at most 2048 characters"),
        custom(function = "no_control_characters")
    )]
    pub long_url: Option<String>,
}

/// A stored mapping as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrlResponse {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
}

impl From<ShortUrl> for ShortUrlResponse {
    fn from(short_url: ShortUrl) -> Self {
        Self {
            id: short_url.id,
            long_url: short_url.long_url,
            short_code: short_url.short_code,
        }
    }
}
