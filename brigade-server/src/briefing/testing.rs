//! In-memory fakes for the briefing pipeline tests

use async_trait::async_trait;
use shared::models::{
    Guest, Reservation, ReservationStatus, Schedule, ServiceConfig, StaffMember, StaffPosition,
};

use super::error::BriefingError;
use super::narrator::NarrativeGenerator;
use super::source::ServiceDataSource;
use super::summary::StructuredSummary;
use crate::db::repository::{RepoError, RepoResult};
use crate::utils::time;

/// Record store fake with per-slice failure injection
#[derive(Default)]
pub struct FakeSource {
    pub reservations: Vec<Reservation>,
    pub schedules: Vec<Schedule>,
    pub configs: Vec<ServiceConfig>,
    pub guests: Vec<Guest>,
    pub staff: Vec<StaffMember>,
    pub fail_reservations: bool,
    pub fail_schedules: bool,
    pub fail_config: bool,
    pub fail_guests: bool,
}

fn unavailable<T>() -> RepoResult<T> {
    Err(RepoError::Database("database is locked".into()))
}

#[async_trait]
impl ServiceDataSource for FakeSource {
    async fn list_reservations(&self, service_date: Option<&str>) -> RepoResult<Vec<Reservation>> {
        if self.fail_reservations {
            return unavailable();
        }
        Ok(self
            .reservations
            .iter()
            .filter(|r| service_date.is_none_or(|d| r.service_date == d))
            .cloned()
            .collect())
    }

    async fn list_schedules(&self, service_date: Option<&str>) -> RepoResult<Vec<Schedule>> {
        if self.fail_schedules {
            return unavailable();
        }
        Ok(self
            .schedules
            .iter()
            .filter(|s| service_date.is_none_or(|d| s.service_date == d))
            .cloned()
            .collect())
    }

    async fn get_service_config(&self, service_date: &str) -> RepoResult<Option<ServiceConfig>> {
        if self.fail_config {
            return unavailable();
        }
        Ok(self
            .configs
            .iter()
            .find(|c| c.service_date == service_date)
            .cloned())
    }

    async fn list_guests(&self) -> RepoResult<Vec<Guest>> {
        if self.fail_guests {
            return unavailable();
        }
        Ok(self.guests.clone())
    }

    async fn list_staff(&self) -> RepoResult<Vec<StaffMember>> {
        Ok(self.staff.clone())
    }
}

/// Narrator that always fails, like an unreachable upstream
pub struct FailingNarrator;

#[async_trait]
impl NarrativeGenerator for FailingNarrator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _summary: &StructuredSummary) -> Result<String, BriefingError> {
        Err(BriefingError::Generation(
            "error sending request: connection refused".into(),
        ))
    }
}

/// Narrator that returns a fixed text
pub struct FixedNarrator(pub &'static str);

#[async_trait]
impl NarrativeGenerator for FixedNarrator {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn generate(&self, _summary: &StructuredSummary) -> Result<String, BriefingError> {
        Ok(self.0.to_string())
    }
}

// ── Fixtures ────────────────────────────────────────────────────────

pub fn reservation(
    id: i64,
    guest_id: i64,
    service_date: &str,
    time: &str,
    party_size: i64,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id,
        guest_id,
        guest_name: format!("Guest {guest_id}"),
        service_date: service_date.into(),
        time: time.into(),
        party_size,
        status,
        notes: None,
        created_at: 0,
        updated_at: 0,
    }
}

pub fn schedule(
    id: i64,
    staff_name: &str,
    service_date: &str,
    shift_start: &str,
    shift_end: &str,
    hourly_rate: f64,
) -> Schedule {
    Schedule {
        id,
        staff_id: id,
        staff_name: staff_name.into(),
        position: StaffPosition::Server,
        service_date: service_date.into(),
        shift_start: shift_start.into(),
        shift_end: shift_end.into(),
        scheduled_hours: time::shift_hours(shift_start, shift_end).unwrap(),
        hourly_rate,
        notes: None,
        created_at: 0,
        updated_at: 0,
    }
}

pub fn config(service_date: &str, walk_in_min: i64, walk_in_max: i64) -> ServiceConfig {
    ServiceConfig {
        id: 1,
        service_date: service_date.into(),
        expected_walk_in_min: walk_in_min,
        expected_walk_in_max: walk_in_max,
        peak_time_start: None,
        peak_time_end: None,
        notes: None,
        created_at: 0,
        updated_at: 0,
    }
}

pub fn guest(id: i64, name: &str, vip_status: bool, total_spend: f64) -> Guest {
    Guest {
        id,
        name: name.into(),
        phone: None,
        email: None,
        total_visits: 0,
        total_spend,
        last_visit: None,
        preferences: None,
        notes: None,
        vip_status,
        created_at: 0,
        updated_at: 0,
    }
}
