//! Guest Repository

use super::{RepoError, RepoResult};
use shared::models::{Guest, GuestCreate, GuestUpdate};
use sqlx::SqlitePool;

const SELECT: &str = "SELECT id, name, phone, email, total_visits, total_spend, last_visit, preferences, notes, vip_status, created_at, updated_at FROM guest";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Guest>> {
    let rows = sqlx::query_as::<_, Guest>(&format!("{SELECT} ORDER BY name COLLATE NOCASE"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Guest>> {
    let row = sqlx::query_as::<_, Guest>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Batch lookup, unknown ids are skipped
pub async fn find_by_ids(pool: &SqlitePool, ids: &[i64]) -> RepoResult<Vec<Guest>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("{SELECT} WHERE id IN ({placeholders})");
    let mut query = sqlx::query_as::<_, Guest>(&sql);
    for id in ids {
        query = query.bind(id);
    }
    Ok(query.fetch_all(pool).await?)
}

pub async fn create(pool: &SqlitePool, data: GuestCreate) -> RepoResult<Guest> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO guest (id, name, phone, email, total_visits, total_spend, last_visit, preferences, notes, vip_status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.total_visits)
    .bind(data.total_spend)
    .bind(&data.last_visit)
    .bind(&data.preferences)
    .bind(&data.notes)
    .bind(data.vip_status)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create guest".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: GuestUpdate) -> RepoResult<Guest> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE guest SET name = COALESCE(?1, name), phone = COALESCE(?2, phone), email = COALESCE(?3, email), total_visits = COALESCE(?4, total_visits), total_spend = COALESCE(?5, total_spend), last_visit = COALESCE(?6, last_visit), preferences = COALESCE(?7, preferences), notes = COALESCE(?8, notes), vip_status = COALESCE(?9, vip_status), updated_at = ?10 WHERE id = ?11",
    )
    .bind(&data.name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.total_visits)
    .bind(data.total_spend)
    .bind(&data.last_visit)
    .bind(&data.preferences)
    .bind(&data.notes)
    .bind(data.vip_status)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Guest {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Guest {id} not found")))
}

/// Hard delete. Reservations keep their `guest_name` snapshot.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM guest WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
