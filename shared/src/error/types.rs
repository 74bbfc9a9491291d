//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error every layer converges on before reaching a handler:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (violated constraint, resource id, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Error body returned by every failing endpoint
///
/// - `code`: numeric [`ErrorCode`]
/// - `message`: human-readable message
/// - `details`: additional error details (field, id, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Build the error body for an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::ScheduleNotFound);
        assert_eq!(err.code, ErrorCode::ScheduleNotFound);
        assert_eq!(err.message, "Schedule not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::with_message(
            ErrorCode::InvalidWalkInRange,
            "expected_walk_in_min (8) must not exceed expected_walk_in_max (4)",
        )
        .with_detail("field", "expected_walk_in_min");

        assert_eq!(err.code, ErrorCode::InvalidWalkInRange);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "expected_walk_in_min");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        assert_eq!(AppError::validation("x").code, ErrorCode::ValidationFailed);
        assert_eq!(AppError::database("x").code, ErrorCode::DatabaseError);
        assert_eq!(
            AppError::database("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::GenerationFailed, "upstream timed out");
        assert_eq!(format!("{}", err), "upstream timed out");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::with_message(ErrorCode::GuestNotFound, "Guest 7 not found")
            .with_detail("id", 7);
        let response = ApiResponse::error(&err);

        assert_eq!(response.code, 4001);
        assert_eq!(response.message, "Guest 7 not found");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let response = ApiResponse::error(&AppError::new(ErrorCode::InvalidPartySize));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":4102"));
        assert!(json.contains("\"message\":\"Party size must be at least 1\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_into_response_status() {
        use axum::response::IntoResponse;

        let resp = AppError::new(ErrorCode::ServiceConfigExists).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = AppError::new(ErrorCode::GenerationFailed).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
