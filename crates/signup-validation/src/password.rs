//! Password validation functions

/// Minimum number of characters in a password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Why a password was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    Empty,
    TooShort,
    /// Missing at least one of: ASCII lowercase, ASCII uppercase, digit
    MissingCharacterClass,
}

/// Checks a password against the signup strength rule:
/// 8+ characters with lowercase, uppercase and a digit. Symbols are allowed
/// but never required.
///
/// Issues are reported in rule order; the first one found is returned.
pub fn check_password_strength(password: &str) -> Result<(), PasswordIssue> {
    if password.is_empty() {
        return Err(PasswordIssue::Empty);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordIssue::TooShort);
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_lowercase || !has_uppercase || !has_digit {
        return Err(PasswordIssue::MissingCharacterClass);
    }

    Ok(())
}
