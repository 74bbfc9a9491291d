//! Staff Repository

use super::{RepoError, RepoResult};
use shared::error::AppError;
use shared::models::{StaffCreate, StaffMember, StaffPosition, StaffUpdate};
use sqlx::SqlitePool;

const SELECT: &str =
    "SELECT id, name, position, hourly_rate, created_at, updated_at FROM staff";

fn parse_position(raw: &str) -> RepoResult<StaffPosition> {
    raw.parse()
        .map_err(|e: AppError| RepoError::Validation(e.message))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<StaffMember>> {
    let rows = sqlx::query_as::<_, StaffMember>(&format!("{SELECT} ORDER BY name COLLATE NOCASE"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<StaffMember>> {
    let row = sqlx::query_as::<_, StaffMember>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: StaffCreate) -> RepoResult<StaffMember> {
    let position = parse_position(&data.position)?;
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO staff (id, name, position, hourly_rate, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(position)
    .bind(data.hourly_rate)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create staff member".into()))
}

/// Existing schedules keep their name / position / rate snapshot.
pub async fn update(pool: &SqlitePool, id: i64, data: StaffUpdate) -> RepoResult<StaffMember> {
    let position = data.position.as_deref().map(parse_position).transpose()?;
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE staff SET name = COALESCE(?1, name), position = COALESCE(?2, position), hourly_rate = COALESCE(?3, hourly_rate), updated_at = ?4 WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(position)
    .bind(data.hourly_rate)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Staff member {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Staff member {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM staff WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
