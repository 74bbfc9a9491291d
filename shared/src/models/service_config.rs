//! Service Config Model (每日营业配置)

use serde::{Deserialize, Serialize};

/// Per-date service configuration, at most one per `service_date`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ServiceConfig {
    pub id: i64,
    pub service_date: String,
    pub expected_walk_in_min: i64,
    pub expected_walk_in_max: i64,
    pub peak_time_start: Option<String>,
    pub peak_time_end: Option<String>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create service config payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfigCreate {
    pub service_date: String,
    #[serde(default)]
    pub expected_walk_in_min: i64,
    #[serde(default)]
    pub expected_walk_in_max: i64,
    pub peak_time_start: Option<String>,
    pub peak_time_end: Option<String>,
    pub notes: Option<String>,
}

/// Update service config payload (keyed by date in the path)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfigUpdate {
    pub expected_walk_in_min: Option<i64>,
    pub expected_walk_in_max: Option<i64>,
    pub peak_time_start: Option<String>,
    pub peak_time_end: Option<String>,
    pub notes: Option<String>,
}

impl ServiceConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.expected_walk_in_min.is_none()
            && self.expected_walk_in_max.is_none()
            && self.peak_time_start.is_none()
            && self.peak_time_end.is_none()
            && self.notes.is_none()
    }
}
