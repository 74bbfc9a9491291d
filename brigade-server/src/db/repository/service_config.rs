//! Service Config Repository
//!
//! Keyed by `service_date` (UNIQUE), at most one row per date.

use super::{RepoError, RepoResult};
use shared::models::{ServiceConfig, ServiceConfigCreate, ServiceConfigUpdate};
use sqlx::SqlitePool;

const SELECT: &str = "SELECT id, service_date, expected_walk_in_min, expected_walk_in_max, peak_time_start, peak_time_end, notes, created_at, updated_at FROM service_config";

pub async fn find_by_date(pool: &SqlitePool, service_date: &str) -> RepoResult<Option<ServiceConfig>> {
    let row = sqlx::query_as::<_, ServiceConfig>(&format!("{SELECT} WHERE service_date = ?"))
        .bind(service_date)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ServiceConfigCreate) -> RepoResult<ServiceConfig> {
    if data.expected_walk_in_min > data.expected_walk_in_max {
        return Err(RepoError::Validation(format!(
            "expected_walk_in_min ({}) must not exceed expected_walk_in_max ({})",
            data.expected_walk_in_min, data.expected_walk_in_max
        )));
    }
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "INSERT INTO service_config (id, service_date, expected_walk_in_min, expected_walk_in_max, peak_time_start, peak_time_end, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(id)
    .bind(&data.service_date)
    .bind(data.expected_walk_in_min)
    .bind(data.expected_walk_in_max)
    .bind(&data.peak_time_start)
    .bind(&data.peak_time_end)
    .bind(&data.notes)
    .bind(now)
    .execute(pool)
    .await;

    match result.map_err(RepoError::from) {
        Ok(_) => {}
        Err(RepoError::Duplicate(_)) => {
            return Err(RepoError::Duplicate(format!(
                "Service config for {} already exists",
                data.service_date
            )));
        }
        Err(e) => return Err(e),
    }

    find_by_date(pool, &data.service_date)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create service config".into()))
}

/// Merge the update into the stored row; walk-in bounds are re-checked
/// against the merged values.
pub async fn update(
    pool: &SqlitePool,
    service_date: &str,
    data: ServiceConfigUpdate,
) -> RepoResult<ServiceConfig> {
    let existing = find_by_date(pool, service_date)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Service config for {service_date} not found")))?;

    let walk_in_min = data.expected_walk_in_min.unwrap_or(existing.expected_walk_in_min);
    let walk_in_max = data.expected_walk_in_max.unwrap_or(existing.expected_walk_in_max);
    if walk_in_min > walk_in_max {
        return Err(RepoError::Validation(format!(
            "expected_walk_in_min ({walk_in_min}) must not exceed expected_walk_in_max ({walk_in_max})"
        )));
    }
    let now = shared::util::now_millis();

    let rows = sqlx::query(
        "UPDATE service_config SET expected_walk_in_min = ?1, expected_walk_in_max = ?2, peak_time_start = COALESCE(?3, peak_time_start), peak_time_end = COALESCE(?4, peak_time_end), notes = COALESCE(?5, notes), updated_at = ?6 WHERE service_date = ?7",
    )
    .bind(walk_in_min)
    .bind(walk_in_max)
    .bind(&data.peak_time_start)
    .bind(&data.peak_time_end)
    .bind(&data.notes)
    .bind(now)
    .bind(service_date)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Service config for {service_date} not found"
        )));
    }
    find_by_date(pool, service_date)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Service config for {service_date} not found")))
}

pub async fn delete(pool: &SqlitePool, service_date: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM service_config WHERE service_date = ?")
        .bind(service_date)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    fn config(date: &str, min: i64, max: i64) -> ServiceConfigCreate {
        ServiceConfigCreate {
            service_date: date.into(),
            expected_walk_in_min: min,
            expected_walk_in_max: max,
            peak_time_start: Some("19:00".into()),
            peak_time_end: Some("21:00".into()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_one_config_per_date() {
        let pool = test_pool().await;
        create(&pool, config("2025-06-01", 5, 12)).await.unwrap();
        let err = create(&pool, config("2025-06-01", 0, 3)).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(msg) if msg.contains("2025-06-01")));
        assert!(create(&pool, config("2025-06-02", 0, 3)).await.is_ok());
    }

    #[tokio::test]
    async fn test_find_missing_date_is_none() {
        let pool = test_pool().await;
        assert!(find_by_date(&pool, "2025-06-01").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_checks_merged_bounds() {
        let pool = test_pool().await;
        create(&pool, config("2025-06-01", 5, 12)).await.unwrap();

        let updated = update(
            &pool,
            "2025-06-01",
            ServiceConfigUpdate {
                expected_walk_in_max: Some(20),
                notes: Some("Private party in the back room".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.expected_walk_in_min, 5);
        assert_eq!(updated.expected_walk_in_max, 20);
        assert_eq!(updated.peak_time_start.as_deref(), Some("19:00"));

        let err = update(
            &pool,
            "2025-06-01",
            ServiceConfigUpdate {
                expected_walk_in_min: Some(25),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_date() {
        let pool = test_pool().await;
        let err = update(&pool, "2025-06-01", ServiceConfigUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert!(!delete(&pool, "2025-06-01").await.unwrap());
    }
}
