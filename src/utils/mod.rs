//! Utility functions shared across layers.
//!
//! - [`code_generator`] - base62 short code generation and validation
//! - [`db_error`] - PostgreSQL unique-violation classification
//! - [`validation`] - request field validators

pub mod code_generator;
pub mod db_error;
pub mod validation;
