//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers before anything reaches the repositories.

use crate::utils::{AppError, ErrorCode, time};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: guest, staff member
pub const MAX_NAME_LEN: usize = 200;

/// Notes, preferences
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(too_long(field, value.len(), max_len));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(too_long(field, v.len(), max_len));
    }
    Ok(())
}

/// Validate a monetary amount is finite and non-negative
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(out_of_range(field, format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(out_of_range(
            field,
            format!("{field} must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

/// Validate a count is non-negative
pub fn validate_non_negative(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(out_of_range(
            field,
            format!("{field} must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

/// Validate party size (at least one cover)
pub fn validate_party_size(value: i64) -> Result<(), AppError> {
    if value < 1 {
        return Err(AppError::with_message(
            ErrorCode::InvalidPartySize,
            format!("party_size must be at least 1, got {value}"),
        )
        .with_detail("field", "party_size"));
    }
    Ok(())
}

/// Validate walk-in bounds: both non-negative, min <= max
pub fn validate_walk_in_range(min: i64, max: i64) -> Result<(), AppError> {
    validate_non_negative(min, "expected_walk_in_min")?;
    validate_non_negative(max, "expected_walk_in_max")?;
    if min > max {
        return Err(AppError::with_message(
            ErrorCode::InvalidWalkInRange,
            format!("expected_walk_in_min ({min}) must not exceed expected_walk_in_max ({max})"),
        )
        .with_detail("field", "expected_walk_in_min"));
    }
    Ok(())
}

/// Validate the planned peak window: each bound HH:MM, start before end when both set
pub fn validate_peak_window(start: Option<&str>, end: Option<&str>) -> Result<(), AppError> {
    let start = start.map(|t| time::parse_time(t, "peak_time_start")).transpose()?;
    let end = end.map(|t| time::parse_time(t, "peak_time_end")).transpose()?;
    if let (Some(s), Some(e)) = (start, end)
        && e <= s
    {
        return Err(AppError::with_message(
            ErrorCode::ValidationFailed,
            "peak_time_end must be after peak_time_start",
        )
        .with_detail("field", "peak_time_end"));
    }
    Ok(())
}

fn too_long(field: &str, len: usize, max_len: usize) -> AppError {
    AppError::with_message(
        ErrorCode::ValueOutOfRange,
        format!("{field} is too long ({len} chars, max {max_len})"),
    )
    .with_detail("field", field)
}

fn out_of_range(field: &str, message: String) -> AppError {
    AppError::with_message(ErrorCode::ValueOutOfRange, message).with_detail("field", field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Ana", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
        let long = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&long, "notes", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_amount() {
        assert!(validate_amount(0.0, "hourly_rate").is_ok());
        assert!(validate_amount(-1.0, "hourly_rate").is_err());
        assert!(validate_amount(f64::INFINITY, "hourly_rate").is_err());
    }

    #[test]
    fn test_party_size() {
        assert!(validate_party_size(1).is_ok());
        assert_eq!(
            validate_party_size(0).unwrap_err().code,
            ErrorCode::InvalidPartySize
        );
    }

    #[test]
    fn test_walk_in_min_greater_than_max_is_rejected() {
        assert!(validate_walk_in_range(5, 12).is_ok());
        assert!(validate_walk_in_range(0, 0).is_ok());
        let err = validate_walk_in_range(8, 4).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWalkInRange);
        assert!(err.message.contains("must not exceed"));
        assert!(validate_walk_in_range(-1, 4).is_err());
    }

    #[test]
    fn test_peak_window() {
        assert!(validate_peak_window(None, None).is_ok());
        assert!(validate_peak_window(Some("19:00"), None).is_ok());
        assert!(validate_peak_window(Some("19:00"), Some("21:00")).is_ok());
        assert_eq!(
            validate_peak_window(Some("21:00"), Some("19:00")).unwrap_err().code,
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            validate_peak_window(Some("7pm"), None).unwrap_err().code,
            ErrorCode::InvalidFormat
        );
    }
}
