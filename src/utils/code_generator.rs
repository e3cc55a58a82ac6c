//! Short code generation and validation utilities.
//!
//! Codes are drawn uniformly from the base62 alphabet (`0-9`, `A-Z`, `a-z`),
//! which needs no escaping in a URL path.

use crate::domain::code_generator::CodeGenerator;
use rand::Rng;

/// Characters a short code may contain.
pub const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default short code length. 62^8 is about 2.2e14 codes.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Smallest configurable code length.
pub const MIN_CODE_LENGTH: usize = 4;

/// Largest configurable code length (matches the `short_code` column width).
pub const MAX_CODE_LENGTH: usize = 32;

/// Codes that would be shadowed by a static route.
pub const RESERVED_CODES: &[&str] = &["health"];

/// Generates a random code of `length` base62 characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has exactly `length` characters, all from [`ALPHABET`].
pub fn is_valid_code(code: &str, length: usize) -> bool {
    code.len() == length && code.bytes().all(|b| ALPHABET.contains(&b))
}

/// Returns true if `code` collides with a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// [`CodeGenerator`] backed by the thread-local RNG. Never yields a reserved code.
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator for codes of `length` characters.
    ///
    /// The length is clamped to [`MIN_CODE_LENGTH`]..=[`MAX_CODE_LENGTH`].
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        loop {
            let code = generate_code(self.length);
            if !is_reserved_code(&code) {
                return code;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_is_base62() {
        assert_eq!(ALPHABET.len(), 62);

        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        for length in [MIN_CODE_LENGTH, DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generated_codes_match_policy() {
        for _ in 0..1000 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(is_valid_code(&code, DEFAULT_CODE_LENGTH), "bad code {code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000)
            .map(|_| generate_code(DEFAULT_CODE_LENGTH))
            .collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_whole_alphabet() {
        let seen: HashSet<char> = (0..2000)
            .flat_map(|_| generate_code(DEFAULT_CODE_LENGTH).chars().collect::<Vec<_>>())
            .collect();

        // 16000 draws over 62 symbols; every symbol shows up.
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_is_valid_code_rejects_wrong_length() {
        assert!(!is_valid_code("abc", DEFAULT_CODE_LENGTH));
        assert!(!is_valid_code("abcdefghi", DEFAULT_CODE_LENGTH));
        assert!(!is_valid_code("", DEFAULT_CODE_LENGTH));
    }

    #[test]
    fn test_is_valid_code_rejects_foreign_characters() {
        assert!(!is_valid_code("abcd-fgh", DEFAULT_CODE_LENGTH));
        assert!(!is_valid_code("abcd_fgh", DEFAULT_CODE_LENGTH));
        assert!(!is_valid_code("abcdéfg", DEFAULT_CODE_LENGTH));
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved_code("health"));
        assert!(!is_reserved_code("Health"));
        assert!(!is_reserved_code("aZ3kP9qX"));
    }

    #[test]
    fn test_random_generator_uses_configured_length() {
        let generator = RandomCodeGenerator::new(12);
        assert_eq!(generator.generate().len(), 12);
    }

    #[test]
    fn test_random_generator_clamps_length() {
        assert_eq!(RandomCodeGenerator::new(1).length(), MIN_CODE_LENGTH);
        assert_eq!(RandomCodeGenerator::new(500).length(), MAX_CODE_LENGTH);
        assert_eq!(RandomCodeGenerator::default().length(), DEFAULT_CODE_LENGTH);
    }
}
