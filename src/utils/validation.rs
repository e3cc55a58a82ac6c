//! Custom validators used by request DTOs.

use validator::ValidationError;

/// Rejects strings containing ASCII control characters.
///
/// A stored `long_url` is sent back verbatim in a `Location` header, which
/// cannot carry control characters.
pub fn no_control_characters(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| c.is_ascii_control()) {
        let mut err = ValidationError::new("control_characters");
        err.message = Some("must not contain control characters".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_url() {
        assert!(no_control_characters("https://example.com/a?b=c#d").is_ok());
    }

    #[test]
    fn test_accepts_non_ascii() {
        assert!(no_control_characters("https://例え.jp/パス").is_ok());
    }

    #[test]
    fn test_rejects_newline_and_tab() {
        assert!(no_control_characters("https://example.com/\r\nSet-Cookie: x").is_err());
        assert!(no_control_characters("https://example.com/\t").is_err());
    }

    #[test]
    fn test_rejects_delete_character() {
        assert!(no_control_characters("https://example.com/\u{7f}").is_err());
    }
}
