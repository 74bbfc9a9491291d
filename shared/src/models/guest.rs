//! Guest Model (客人档案)

use serde::{Deserialize, Serialize};

/// Guest entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Lifetime visit count
    pub total_visits: i64,
    /// Lifetime spend
    pub total_spend: f64,
    /// Last visit date (YYYY-MM-DD)
    pub last_visit: Option<String>,
    /// Seating, dietary and service preferences
    pub preferences: Option<String>,
    pub notes: Option<String>,
    pub vip_status: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create guest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub total_visits: i64,
    #[serde(default)]
    pub total_spend: f64,
    pub last_visit: Option<String>,
    pub preferences: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub vip_status: bool,
}

/// Update guest payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub total_visits: Option<i64>,
    pub total_spend: Option<f64>,
    pub last_visit: Option<String>,
    pub preferences: Option<String>,
    pub notes: Option<String>,
    pub vip_status: Option<bool>,
}

impl GuestUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.total_visits.is_none()
            && self.total_spend.is_none()
            && self.last_visit.is_none()
            && self.preferences.is_none()
            && self.notes.is_none()
            && self.vip_status.is_none()
    }
}
