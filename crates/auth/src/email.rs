use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use brewerp_core::DomainError;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Sign-in failures, worded for display next to the email field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Check an email address and return it trimmed.
pub fn validate_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(AuthError::InvalidEmail);
    }
    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(validate_email(" barista@kopi.id ").unwrap(), "barista@kopi.id");
        assert!(validate_email("a.b+c@mail.example.co").is_ok());
    }

    #[test]
    fn empty_email_is_required() {
        assert_eq!(validate_email(""), Err(AuthError::EmailRequired));
        assert_eq!(validate_email("   "), Err(AuthError::EmailRequired));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["barista", "barista@", "@kopi.id", "barista@kopi", "bar ista@kopi.id", "a@b@c.d", "a@b."] {
            assert_eq!(validate_email(email), Err(AuthError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn converts_to_validation_error() {
        let err: DomainError = AuthError::InvalidEmail.into();
        assert_eq!(err, DomainError::validation("Please enter a valid email address"));
    }
}
