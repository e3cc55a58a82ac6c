//! Classification of PostgreSQL constraint violations.

/// Unique constraint on `short_urls.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "short_urls_short_code_key";

/// Unique index on `md5(short_urls.long_url)`.
pub const LONG_URL_CONSTRAINT: &str = "short_urls_long_url_md5_key";

/// Which uniqueness rule an insert violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueViolation {
    ShortCode,
    LongUrl,
    Other,
}

/// Returns the violated uniqueness rule, or `None` if `e` is not a unique violation.
pub fn unique_violation(e: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(classify_constraint(db_err.constraint()))
}

fn classify_constraint(constraint: Option<&str>) -> UniqueViolation {
    match constraint {
        Some(SHORT_CODE_CONSTRAINT) => UniqueViolation::ShortCode,
        Some(LONG_URL_CONSTRAINT) => UniqueViolation::LongUrl,
        _ => UniqueViolation::Other,
    }
}
