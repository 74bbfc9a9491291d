//! Schedule Model (排班)

use serde::{Deserialize, Serialize};

use super::staff::StaffPosition;

/// Shift schedule entity
///
/// `staff_name`, `position` and `hourly_rate` are snapshots of the staff
/// member at creation time. `scheduled_hours` is derived from
/// `shift_start` / `shift_end` by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Schedule {
    pub id: i64,
    pub staff_id: i64,
    pub staff_name: String,
    pub position: StaffPosition,
    /// Service date (YYYY-MM-DD)
    pub service_date: String,
    /// Shift start (HH:MM)
    pub shift_start: String,
    /// Shift end (HH:MM)
    pub shift_end: String,
    pub scheduled_hours: f64,
    pub hourly_rate: f64,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCreate {
    pub staff_id: i64,
    pub service_date: String,
    pub shift_start: String,
    pub shift_end: String,
    pub notes: Option<String>,
}

/// Update schedule payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    pub service_date: Option<String>,
    pub shift_start: Option<String>,
    pub shift_end: Option<String>,
    /// Override the rate snapshot (e.g. holiday pay)
    pub hourly_rate: Option<f64>,
    pub notes: Option<String>,
}

impl ScheduleUpdate {
    pub fn is_empty(&self) -> bool {
        self.service_date.is_none()
            && self.shift_start.is_none()
            && self.shift_end.is_none()
            && self.hourly_rate.is_none()
            && self.notes.is_none()
    }
}
