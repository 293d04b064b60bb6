//! Helpers for turning raw form fields into typed values.

use crate::error::{DomainError, DomainResult};

/// Trimmed, non-empty text.
pub fn require_text(field: &str, raw: &str) -> DomainResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// A finite decimal number.
pub fn parse_number(field: &str, raw: &str) -> DomainResult<f64> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    let number: f64 = value
        .parse()
        .map_err(|_| DomainError::validation(format!("{field} must be a number, got {value:?}")))?;
    if !number.is_finite() {
        return Err(DomainError::validation(format!("{field} must be finite")));
    }
    Ok(number)
}

/// A finite number strictly greater than zero.
pub fn parse_positive(field: &str, raw: &str) -> DomainResult<f64> {
    let number = parse_number(field, raw)?;
    if number <= 0.0 {
        return Err(DomainError::validation(format!("{field} must be greater than zero")));
    }
    Ok(number)
}

/// A finite number that is zero or more.
pub fn parse_non_negative(field: &str, raw: &str) -> DomainResult<f64> {
    let number = parse_number(field, raw)?;
    if number < 0.0 {
        return Err(DomainError::validation(format!("{field} cannot be negative")));
    }
    Ok(number)
}
