use std::fmt;

pub const NAME_MAX_LEN: usize = 255;
pub const LOCATION_MAX_LEN: usize = 255;
pub const REMARKS_MAX_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

/// Strips control characters and collapses runs of whitespace.
pub fn sanitize_string(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_control())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

pub fn validate_max_len(field: &'static str, value: &str, max_len: usize) -> ValidationResult {
    if value.len() > max_len {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters", max_len),
        ));
    }

    Ok(())
}

pub fn validate_non_negative(field: &'static str, value: i32) -> ValidationResult {
    if value < 0 {
        return Err(ValidationError::new(field, "must not be negative"));
    }

    Ok(())
}

pub fn validate_at_least_one(field: &'static str, value: i32) -> ValidationResult {
    if value < 1 {
        return Err(ValidationError::new(field, "must be at least 1"));
    }

    Ok(())
}

/// Builds the error for a value outside a closed enumeration.
pub fn enum_error(field: &'static str, allowed: &[&str]) -> ValidationError {
    ValidationError::new(field, format!("must be one of: {}", allowed.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_required_field() {
        assert!(validate_required("name", "Desk").is_ok());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "").is_err());
    }

    #[test]
    fn validates_max_len() {
        assert!(validate_max_len("name", "abc", 3).is_ok());
        assert!(validate_max_len("name", "abcd", 3).is_err());
    }

    #[test]
    fn sanitizes_string() {
        assert_eq!(sanitize_string("  Lab  Stool "), "Lab Stool");
        assert_eq!(sanitize_string("single"), "single");
        assert_eq!(sanitize_string(" \n "), "");
        assert_eq!(sanitize_string("ab\u{0000}cd\u{0007}"), "abcd");
    }

    #[test]
    fn validates_non_negative() {
        assert!(validate_non_negative("quantity", 0).is_ok());
        assert!(validate_non_negative("quantity", 10).is_ok());
        assert!(validate_non_negative("quantity", -1).is_err());
    }

    #[test]
    fn validates_at_least_one() {
        assert!(validate_at_least_one("quantity", 1).is_ok());
        assert!(validate_at_least_one("quantity", 0).is_err());
        assert!(validate_at_least_one("quantity", -3).is_err());
    }

    #[test]
    fn enum_error_lists_allowed_values() {
        let err = enum_error("condition", &["Good", "Fair"]);
        assert_eq!(err.field, "condition");
        assert!(err.message.contains("Good, Fair"));
    }
}
