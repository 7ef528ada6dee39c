//! Email validation for the signup form
//!
//! Deliberately permissive: the address only has to be non-empty and contain `@`.
//! The email service is the one that finds out whether it is deliverable.

use super::SignupError;

/// Validate a candidate email address.
///
/// Rules are checked in order: empty input first, then the `@` check.
pub fn validate_email(email: &str) -> Result<(), SignupError> {
    if email.is_empty() {
        return Err(SignupError::MissingEmail);
    }

    if !email.contains('@') {
        return Err(SignupError::InvalidFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("user.name+tag@example.co.uk").is_ok());
        assert!(validate_email("student@school").is_ok());
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(SignupError::MissingEmail));
    }

    #[test]
    fn test_missing_at_sign() {
        assert_eq!(validate_email("not-an-email"), Err(SignupError::InvalidFormat));
        assert_eq!(validate_email("example.com"), Err(SignupError::InvalidFormat));
        assert_eq!(validate_email(" "), Err(SignupError::InvalidFormat));
    }

    #[test]
    fn test_permissive_format() {
        // No RFC 5322 checking beyond the `@`
        assert!(validate_email("@").is_ok());
        assert!(validate_email("a@").is_ok());
        assert!(validate_email("@b").is_ok());
        assert!(validate_email(" a@b ").is_ok());
    }
}
