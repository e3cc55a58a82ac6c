//! Core domain entities.
//!
//! - [`ShortUrl`] - a stored short code to long URL mapping
//! - [`NewShortUrl`] - input for creating a mapping; the store assigns the id

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
