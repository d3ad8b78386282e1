//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`, no whitespace or extra `@` in any part.
/// A typo check, not RFC 5322.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Validates the basic email shape
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - At least one '.' in the domain with content after it
/// - No whitespace anywhere
pub fn matches_email_shape(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(matches_email_shape("user@example.com"));
        assert!(matches_email_shape("test.user@example.co.jp"));
        assert!(matches_email_shape("user+tag@example.com"));
        assert!(matches_email_shape("a@b.c"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!matches_email_shape(""));
        assert!(!matches_email_shape("@"));
        assert!(!matches_email_shape("user@"));
        assert!(!matches_email_shape("@example.com"));
        assert!(!matches_email_shape("user@@example.com"));
        assert!(!matches_email_shape("user@example"));
        assert!(!matches_email_shape("us er@example.com"));
        assert!(!matches_email_shape(" user@example.com"));
        assert!(!matches_email_shape("user@example."));
    }
}
