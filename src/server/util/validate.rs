//! Field validation helpers used by `Params::from_dto` conversions.
//!
//! Each helper returns `AppError::BadRequest` with a message naming the offending field.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::AppError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

/// Checks that `value` holds between `min` and `max` characters.
pub fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::BadRequest(format!(
            "Error: {field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Checks that an optional value holds at most `max` characters.
pub fn max_length(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::BadRequest(format!(
            "Error: {field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// Checks a sign-up email: at most 50 characters and well-formed.
pub fn email(value: &str) -> Result<(), AppError> {
    if value.chars().count() > 50 {
        return Err(AppError::BadRequest(
            "Error: email must be at most 50 characters".to_string(),
        ));
    }
    if !is_email(value) {
        return Err(AppError::BadRequest(
            "Error: email must be a well-formed email address".to_string(),
        ));
    }
    Ok(())
}

pub fn password(value: &str) -> Result<(), AppError> {
    length("password", value, 6, 40)
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// True when the value is absent or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(length("username", "été", 3, 20).is_ok());
        assert!(length("username", "ab", 3, 20).is_err());
        assert!(length("username", &"a".repeat(21), 3, 20).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(is_email("agent.fiscal@dgi.gov.ma"));
        assert!(!is_email("agent@"));
        assert!(!is_email("agent dgi@example.com"));
        assert!(email(&format!("{}@example.com", "a".repeat(45))).is_err());
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(None));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some(" AB123 ")));
    }
}
