//! Short code generation contract.

/// Produces candidate short codes.
///
/// A generator makes no uniqueness promise. Callers check candidates against
/// the store and retry on collision.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a new candidate code.
    fn generate(&self) -> String;
}
