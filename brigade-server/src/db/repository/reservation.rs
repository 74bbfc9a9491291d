//! Reservation Repository
//!
//! `guest_name` is a snapshot taken from the guest record when the
//! reservation is created (or re-pointed to another guest); later guest
//! edits do not rewrite it.

use super::{RepoError, RepoResult, guest};
use shared::error::AppError;
use shared::models::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
use sqlx::SqlitePool;

const SELECT: &str = "SELECT id, guest_id, guest_name, service_date, time, party_size, status, notes, created_at, updated_at FROM reservation";

fn parse_status(raw: &str) -> RepoResult<ReservationStatus> {
    raw.parse()
        .map_err(|e: AppError| RepoError::Validation(e.message))
}

async fn guest_name(pool: &SqlitePool, guest_id: i64) -> RepoResult<String> {
    guest::find_by_id(pool, guest_id)
        .await?
        .map(|g| g.name)
        .ok_or_else(|| RepoError::NotFound(format!("Guest {guest_id} not found")))
}

/// All reservations, or those for one service date, ordered by time
pub async fn find_all(
    pool: &SqlitePool,
    service_date: Option<&str>,
) -> RepoResult<Vec<Reservation>> {
    let rows = match service_date {
        Some(date) => {
            sqlx::query_as::<_, Reservation>(&format!(
                "{SELECT} WHERE service_date = ? ORDER BY time, id"
            ))
            .bind(date)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Reservation>(&format!(
                "{SELECT} ORDER BY service_date, time, id"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let row = sqlx::query_as::<_, Reservation>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ReservationCreate) -> RepoResult<Reservation> {
    let status = data
        .status
        .as_deref()
        .map(parse_status)
        .transpose()?
        .unwrap_or_default();
    let name = guest_name(pool, data.guest_id).await?;
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO reservation (id, guest_id, guest_name, service_date, time, party_size, status, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
    )
    .bind(id)
    .bind(data.guest_id)
    .bind(&name)
    .bind(&data.service_date)
    .bind(&data.time)
    .bind(data.party_size)
    .bind(status)
    .bind(&data.notes)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reservation".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: ReservationUpdate,
) -> RepoResult<Reservation> {
    let status = data.status.as_deref().map(parse_status).transpose()?;
    let name = match data.guest_id {
        Some(guest_id) => Some(guest_name(pool, guest_id).await?),
        None => None,
    };
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE reservation SET guest_id = COALESCE(?1, guest_id), guest_name = COALESCE(?2, guest_name), service_date = COALESCE(?3, service_date), time = COALESCE(?4, time), party_size = COALESCE(?5, party_size), status = COALESCE(?6, status), notes = COALESCE(?7, notes), updated_at = ?8 WHERE id = ?9",
    )
    .bind(data.guest_id)
    .bind(&name)
    .bind(&data.service_date)
    .bind(&data.time)
    .bind(data.party_size)
    .bind(status)
    .bind(&data.notes)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
