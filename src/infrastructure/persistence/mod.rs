//! Repository implementations.
//!
//! - [`PgShortUrlRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryShortUrlRepository`] - in-process storage for tests and local runs

pub mod in_memory_short_url_repository;
pub mod pg_short_url_repository;

pub use in_memory_short_url_repository::InMemoryShortUrlRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
