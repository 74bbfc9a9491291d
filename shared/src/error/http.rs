//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound
            | Self::GuestNotFound
            | Self::ReservationNotFound
            | Self::StaffNotFound
            | Self::ScheduleNotFound
            | Self::ServiceConfigNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::ServiceConfigExists => StatusCode::CONFLICT,

            // 502 Bad Gateway (record store slice could not be fetched)
            Self::AggregationFailed => StatusCode::BAD_GATEWAY,

            // 503 Service Unavailable (narrative backend down, client can retry)
            Self::GenerationFailed => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
