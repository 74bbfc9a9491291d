//! Schedule Repository
//!
//! Staff name, position and hourly rate are snapshotted from the staff
//! record at creation time. `scheduled_hours` is always derived from the
//! shift window here, never taken from the caller.

use super::{RepoError, RepoResult, staff};
use crate::utils::time;
use shared::models::{Schedule, ScheduleCreate, ScheduleUpdate};
use sqlx::SqlitePool;

const SELECT: &str = "SELECT id, staff_id, staff_name, position, service_date, shift_start, shift_end, scheduled_hours, hourly_rate, notes, created_at, updated_at FROM schedule";

fn hours(shift_start: &str, shift_end: &str) -> RepoResult<f64> {
    time::shift_hours(shift_start, shift_end).map_err(|e| RepoError::Validation(e.message))
}

/// All schedules, or those for one service date, ordered by shift start
pub async fn find_all(pool: &SqlitePool, service_date: Option<&str>) -> RepoResult<Vec<Schedule>> {
    let rows = match service_date {
        Some(date) => {
            sqlx::query_as::<_, Schedule>(&format!(
                "{SELECT} WHERE service_date = ? ORDER BY shift_start, id"
            ))
            .bind(date)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Schedule>(&format!(
                "{SELECT} ORDER BY service_date, shift_start, id"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Schedule>> {
    let row = sqlx::query_as::<_, Schedule>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ScheduleCreate) -> RepoResult<Schedule> {
    let scheduled_hours = hours(&data.shift_start, &data.shift_end)?;
    let member = staff::find_by_id(pool, data.staff_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Staff member {} not found", data.staff_id)))?;

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO schedule (id, staff_id, staff_name, position, service_date, shift_start, shift_end, scheduled_hours, hourly_rate, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
    )
    .bind(id)
    .bind(member.id)
    .bind(&member.name)
    .bind(member.position)
    .bind(&data.service_date)
    .bind(&data.shift_start)
    .bind(&data.shift_end)
    .bind(scheduled_hours)
    .bind(member.hourly_rate)
    .bind(&data.notes)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create schedule".into()))
}

/// Merge the update into the stored row and recompute hours from the
/// resulting window.
pub async fn update(pool: &SqlitePool, id: i64, data: ScheduleUpdate) -> RepoResult<Schedule> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Schedule {id} not found")))?;

    let shift_start = data.shift_start.unwrap_or(existing.shift_start);
    let shift_end = data.shift_end.unwrap_or(existing.shift_end);
    let scheduled_hours = hours(&shift_start, &shift_end)?;
    let service_date = data.service_date.unwrap_or(existing.service_date);
    let hourly_rate = data.hourly_rate.unwrap_or(existing.hourly_rate);
    let notes = data.notes.or(existing.notes);
    let now = shared::util::now_millis();

    let rows = sqlx::query(
        "UPDATE schedule SET service_date = ?1, shift_start = ?2, shift_end = ?3, scheduled_hours = ?4, hourly_rate = ?5, notes = ?6, updated_at = ?7 WHERE id = ?8",
    )
    .bind(&service_date)
    .bind(&shift_start)
    .bind(&shift_end)
    .bind(scheduled_hours)
    .bind(hourly_rate)
    .bind(&notes)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Schedule {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Schedule {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM schedule WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
