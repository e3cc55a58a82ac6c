//! Domain layer: entities and the contracts the rest of the crate builds on.
//!
//! - [`entities`] - the short URL mapping
//! - [`repositories`] - the mapping store trait
//! - [`code_generator`] - the short code generator trait
//!
//! Nothing here depends on the database, HTTP, or random number crates.

pub mod code_generator;
pub mod entities;
pub mod repositories;
