//! Metrics Aggregator
//!
//! `aggregate` is the pure reduction; `compute_metrics` fetches the three
//! per-date slices concurrently and feeds them through it.

use rust_decimal::Decimal;
use shared::models::{GuestRange, Reservation, Schedule, ServiceConfig, ServiceMetrics};

use super::error::BriefingError;
use super::source::ServiceDataSource;
use crate::db::repository::RepoResult;
use crate::utils::money::{to_decimal, to_f64};
use crate::utils::time;

/// Reduce one date's records into dashboard metrics.
///
/// Every reservation counts toward `reservation_count` and `total_covers`,
/// whatever its status. Walk-in bounds are 0/0 without a config.
pub fn aggregate(
    service_date: &str,
    reservations: &[Reservation],
    schedules: &[Schedule],
    config: Option<&ServiceConfig>,
) -> ServiceMetrics {
    let total_covers: i64 = reservations.iter().map(|r| r.party_size).sum();

    let (total_hours, labor_cost) = schedules.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(hours, cost), s| {
            let h = to_decimal(s.scheduled_hours);
            (hours + h, cost + h * to_decimal(s.hourly_rate))
        },
    );

    let (walk_in_min, walk_in_max) = config
        .map(|c| (c.expected_walk_in_min, c.expected_walk_in_max))
        .unwrap_or((0, 0));

    ServiceMetrics {
        service_date: service_date.to_string(),
        reservation_count: reservations.len() as i64,
        total_covers,
        staff_scheduled_count: schedules.len() as i64,
        total_hours: to_f64(total_hours),
        labor_cost: to_f64(labor_cost),
        walk_in_min,
        walk_in_max,
        expected_guest_range: GuestRange {
            min: total_covers + walk_in_min,
            max: total_covers + walk_in_max,
        },
    }
}

/// Fetch the date's reservations, schedules and config concurrently and
/// aggregate them.
pub async fn compute_metrics(
    source: &dyn ServiceDataSource,
    service_date: &str,
) -> Result<ServiceMetrics, BriefingError> {
    time::parse_date(service_date).map_err(BriefingError::Validation)?;

    let (reservations, schedules, config) = tokio::join!(
        source.list_reservations(Some(service_date)),
        source.list_schedules(Some(service_date)),
        source.get_service_config(service_date),
    );
    let reservations = required(reservations, "reservations")?;
    let schedules = required(schedules, "schedules")?;
    let config = optional_config(config, service_date);

    let metrics = aggregate(service_date, &reservations, &schedules, config.as_ref());
    tracing::info!(
        service_date = %service_date,
        reservations = metrics.reservation_count,
        covers = metrics.total_covers,
        staff = metrics.staff_scheduled_count,
        "Service metrics computed"
    );
    Ok(metrics)
}

/// A slice the computation cannot do without
pub(crate) fn required<T>(result: RepoResult<T>, slice: &str) -> Result<T, BriefingError> {
    result.map_err(|e| BriefingError::Aggregation(format!("{slice}: {e}")))
}

/// Config is optional: a failed read is logged and treated as absent
pub(crate) fn optional_config(
    result: RepoResult<Option<ServiceConfig>>,
    service_date: &str,
) -> Option<ServiceConfig> {
    match result {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                service_date = %service_date,
                error = %e,
                "Service config unavailable, assuming no walk-ins"
            );
            None
        }
    }
}
