//! Briefing & Dashboard Metrics Models
//!
//! Generated artifacts, never persisted.

use serde::{Deserialize, Serialize};

/// Expected guest range: booked covers plus walk-in bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRange {
    pub min: i64,
    pub max: i64,
}

/// Derived operational metrics for one service date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMetrics {
    pub service_date: String,
    /// All reservations on the date, any status
    pub reservation_count: i64,
    /// Σ party_size over all reservations on the date
    pub total_covers: i64,
    pub staff_scheduled_count: i64,
    pub total_hours: f64,
    pub labor_cost: f64,
    /// Walk-in bounds (0 when the date has no service config)
    pub walk_in_min: i64,
    pub walk_in_max: i64,
    pub expected_guest_range: GuestRange,
}

/// Generate briefing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefingRequest {
    pub service_date: String,
}

/// Generated pre-shift briefing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Briefing {
    pub service_date: String,
    /// Generation time (RFC 3339, UTC)
    pub generated_at: String,
    pub briefing_text: String,
    pub metrics: ServiceMetrics,
}
