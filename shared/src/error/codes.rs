//! Unified error codes for the Brigade workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Guest & reservation errors
//! - 5xxx: Staffing errors (team members, schedules)
//! - 6xxx: Service configuration errors
//! - 7xxx: Briefing errors (aggregation, narrative generation)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so the frontend can switch on it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid format (dates, times)
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Guest & Reservation ====================
    /// Guest not found
    GuestNotFound = 4001,
    /// Reservation not found
    ReservationNotFound = 4101,
    /// Party size must be at least one
    InvalidPartySize = 4102,
    /// Unknown reservation status
    InvalidReservationStatus = 4103,

    // ==================== 5xxx: Staffing ====================
    /// Team member not found
    StaffNotFound = 5001,
    /// Unknown staff position
    InvalidPosition = 5002,
    /// Schedule not found
    ScheduleNotFound = 5101,
    /// Shift end is not after shift start
    InvalidShiftWindow = 5102,

    // ==================== 6xxx: Service Config ====================
    /// No service config for the date
    ServiceConfigNotFound = 6001,
    /// A service config already exists for the date
    ServiceConfigExists = 6002,
    /// Walk-in minimum exceeds maximum
    InvalidWalkInRange = 6003,

    // ==================== 7xxx: Briefing ====================
    /// Required per-date data could not be fetched
    AggregationFailed = 7001,
    /// Narrative generation failed
    GenerationFailed = 7002,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Guest & Reservation
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::InvalidPartySize => "Party size must be at least 1",
            ErrorCode::InvalidReservationStatus => "Invalid reservation status",

            // Staffing
            ErrorCode::StaffNotFound => "Staff member not found",
            ErrorCode::InvalidPosition => "Invalid staff position",
            ErrorCode::ScheduleNotFound => "Schedule not found",
            ErrorCode::InvalidShiftWindow => "Shift end must be after shift start",

            // Service Config
            ErrorCode::ServiceConfigNotFound => "Service config not found",
            ErrorCode::ServiceConfigExists => "Service config already exists for this date",
            ErrorCode::InvalidWalkInRange => "Walk-in minimum must not exceed maximum",

            // Briefing
            ErrorCode::AggregationFailed => "Failed to gather service data",
            ErrorCode::GenerationFailed => "Failed to generate briefing",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Guest & Reservation
            4001 => Ok(ErrorCode::GuestNotFound),
            4101 => Ok(ErrorCode::ReservationNotFound),
            4102 => Ok(ErrorCode::InvalidPartySize),
            4103 => Ok(ErrorCode::InvalidReservationStatus),

            // Staffing
            5001 => Ok(ErrorCode::StaffNotFound),
            5002 => Ok(ErrorCode::InvalidPosition),
            5101 => Ok(ErrorCode::ScheduleNotFound),
            5102 => Ok(ErrorCode::InvalidShiftWindow),

            // Service Config
            6001 => Ok(ErrorCode::ServiceConfigNotFound),
            6002 => Ok(ErrorCode::ServiceConfigExists),
            6003 => Ok(ErrorCode::InvalidWalkInRange),

            // Briefing
            7001 => Ok(ErrorCode::AggregationFailed),
            7002 => Ok(ErrorCode::GenerationFailed),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
