//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and business rules and give HTTP
//! handlers a small API.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - short URL creation and resolution

pub mod services;
