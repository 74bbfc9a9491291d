//! Per-date data access seam
//!
//! The aggregator and briefing service only see the record store through
//! [`ServiceDataSource`], so they can run against SQLite or an in-memory
//! fake.

use async_trait::async_trait;
use shared::models::{Guest, Reservation, Schedule, ServiceConfig, StaffMember};
use sqlx::SqlitePool;

use crate::db::repository::{
    RepoResult, guest, reservation, schedule, service_config, staff,
};

#[async_trait]
pub trait ServiceDataSource: Send + Sync {
    /// Reservations for a date, or all of them when `service_date` is `None`
    async fn list_reservations(&self, service_date: Option<&str>) -> RepoResult<Vec<Reservation>>;

    /// Schedules for a date, or all of them when `service_date` is `None`
    async fn list_schedules(&self, service_date: Option<&str>) -> RepoResult<Vec<Schedule>>;

    /// The date's config; `Ok(None)` when none is configured
    async fn get_service_config(&self, service_date: &str) -> RepoResult<Option<ServiceConfig>>;

    async fn list_guests(&self) -> RepoResult<Vec<Guest>>;

    async fn list_staff(&self) -> RepoResult<Vec<StaffMember>>;
}

/// [`ServiceDataSource`] over the SQLite repositories
#[derive(Clone)]
pub struct SqliteDataSource {
    pool: SqlitePool,
}

impl SqliteDataSource {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceDataSource for SqliteDataSource {
    async fn list_reservations(&self, service_date: Option<&str>) -> RepoResult<Vec<Reservation>> {
        reservation::find_all(&self.pool, service_date).await
    }

    async fn list_schedules(&self, service_date: Option<&str>) -> RepoResult<Vec<Schedule>> {
        schedule::find_all(&self.pool, service_date).await
    }

    async fn get_service_config(&self, service_date: &str) -> RepoResult<Option<ServiceConfig>> {
        service_config::find_by_date(&self.pool, service_date).await
    }

    async fn list_guests(&self) -> RepoResult<Vec<Guest>> {
        guest::find_all(&self.pool).await
    }

    async fn list_staff(&self) -> RepoResult<Vec<StaffMember>> {
        staff::find_all(&self.pool).await
    }
}
