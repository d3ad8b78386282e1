//! String validation functions

/// Strips Unicode whitespace and the byte order mark (U+FEFF) from both ends.
/// `str::trim` leaves U+FEFF in place; browsers strip it.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// True when `s` is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    trim_input(s).is_empty()
}

/// Validates trimmed length in characters
pub fn validate_min_trimmed_length(s: &str, min: usize) -> Result<(), String> {
    if trim_input(s).chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Enumerated-choice membership
pub fn is_one_of<'a, I>(value: &str, allowed: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    allowed.into_iter().any(|candidate| candidate == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(is_blank("\u{3000}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\u{3000}"));
        assert_eq!(trim_input("\u{FEFF}Taro "), "Taro");
        assert!(validate_min_trimmed_length("\u{FEFF}\u{FEFF}", 1).is_err());
    }

    #[test]
    fn test_min_trimmed_length() {
        assert!(validate_min_trimmed_length(" a ", 1).is_ok());
        assert!(validate_min_trimmed_length("  ", 1).is_err());
        assert!(validate_min_trimmed_length("太郎", 2).is_ok());
    }

    #[test]
    fn test_one_of() {
        assert!(is_one_of("b", ["a", "b"]));
        assert!(!is_one_of("B", ["a", "b"]));
        assert!(!is_one_of("", ["a", "b"]));
    }
}
