//! Reservation Model (预订)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Reservation status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [Self::Confirmed, Self::Cancelled, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidReservationStatus,
                    format!("status must be one of confirmed, cancelled, completed (got '{s}')"),
                )
                .with_detail("field", "status")
            })
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub guest_id: i64,
    /// Guest name snapshot taken when the reservation was booked
    pub guest_name: String,
    /// Service date (YYYY-MM-DD)
    pub service_date: String,
    /// Arrival time (HH:MM)
    pub time: String,
    pub party_size: i64,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create reservation payload
///
/// `status` is taken as raw text so unknown values surface as a
/// validation error instead of a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub guest_id: i64,
    pub service_date: String,
    pub time: String,
    pub party_size: i64,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Update reservation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    /// Re-points the reservation and re-snapshots the guest name
    pub guest_id: Option<i64>,
    pub service_date: Option<String>,
    pub time: Option<String>,
    pub party_size: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl ReservationUpdate {
    pub fn is_empty(&self) -> bool {
        self.guest_id.is_none()
            && self.service_date.is_none()
            && self.time.is_none()
            && self.party_size.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}
