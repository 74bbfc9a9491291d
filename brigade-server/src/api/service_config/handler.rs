//! Service Config API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::ServiceDateQuery;
use crate::core::ServerState;
use crate::db::repository::{RepoError, service_config};
use crate::utils::time;
use crate::utils::validation::{
    MAX_NOTE_LEN, validate_optional_text, validate_peak_window, validate_walk_in_range,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{ServiceConfig, ServiceConfigCreate, ServiceConfigUpdate};

fn not_found(service_date: &str) -> AppError {
    AppError::with_message(
        ErrorCode::ServiceConfigNotFound,
        format!("Service config for {service_date} not found"),
    )
    .with_detail("service_date", service_date)
}

/// GET /api/service-config?service_date= - 获取当日配置 (不存在时返回 null)
pub async fn get_by_date(
    State(state): State<ServerState>,
    Query(query): Query<ServiceDateQuery>,
) -> AppResult<Json<Option<ServiceConfig>>> {
    let date = query.required()?;
    let config = service_config::find_by_date(&state.pool, date).await?;
    Ok(Json(config))
}

/// POST /api/service-config - 创建当日配置
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceConfigCreate>,
) -> AppResult<Json<ServiceConfig>> {
    time::parse_date(&payload.service_date)?;
    validate_walk_in_range(payload.expected_walk_in_min, payload.expected_walk_in_max)?;
    validate_peak_window(
        payload.peak_time_start.as_deref(),
        payload.peak_time_end.as_deref(),
    )?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let service_date = payload.service_date.clone();
    let config = service_config::create(&state.pool, payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::ServiceConfigExists, msg)
                .with_detail("service_date", service_date.as_str()),
            other => other.into(),
        })?;
    tracing::info!(service_date = %config.service_date, "Service config created");
    Ok(Json(config))
}

/// PUT /api/service-config/:service_date - 更新当日配置
///
/// walk-in 上下限与高峰时段按合并后的值重新校验。
pub async fn update(
    State(state): State<ServerState>,
    Path(service_date): Path<String>,
    Json(payload): Json<ServiceConfigUpdate>,
) -> AppResult<Json<ServiceConfig>> {
    time::parse_date(&service_date)?;
    if payload.is_empty() {
        return Err(AppError::validation("No fields to update"));
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let existing = service_config::find_by_date(&state.pool, &service_date)
        .await?
        .ok_or_else(|| not_found(&service_date))?;
    validate_walk_in_range(
        payload
            .expected_walk_in_min
            .unwrap_or(existing.expected_walk_in_min),
        payload
            .expected_walk_in_max
            .unwrap_or(existing.expected_walk_in_max),
    )?;
    validate_peak_window(
        payload
            .peak_time_start
            .as_deref()
            .or(existing.peak_time_start.as_deref()),
        payload
            .peak_time_end
            .as_deref()
            .or(existing.peak_time_end.as_deref()),
    )?;

    let config = service_config::update(&state.pool, &service_date, payload).await?;
    Ok(Json(config))
}

/// DELETE /api/service-config/:service_date - 删除当日配置
pub async fn delete(
    State(state): State<ServerState>,
    Path(service_date): Path<String>,
) -> AppResult<Json<bool>> {
    time::parse_date(&service_date)?;
    if !service_config::delete(&state.pool, &service_date).await? {
        return Err(not_found(&service_date));
    }
    Ok(Json(true))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{send, test_state};
    use http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_service_config_lifecycle() {
        let state = test_state().await;

        let (status, body) =
            send(&state, "GET", "/api/service-config?service_date=2025-06-01", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);

        let payload = json!({
            "service_date": "2025-06-01",
            "expected_walk_in_min": 5,
            "expected_walk_in_max": 12,
            "peak_time_start": "19:00",
            "peak_time_end": "21:00"
        });
        let (status, body) = send(&state, "POST", "/api/service-config", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["expected_walk_in_max"], 12);

        let (status, body) = send(&state, "POST", "/api/service-config", Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], 6002);

        let (status, body) = send(
            &state,
            "PUT",
            "/api/service-config/2025-06-01",
            Some(json!({ "expected_walk_in_min": 20 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 6003);

        let (status, body) = send(
            &state,
            "PUT",
            "/api/service-config/2025-06-01",
            Some(json!({ "expected_walk_in_min": 8, "notes": "Patio closed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["expected_walk_in_min"], 8);
        assert_eq!(body["notes"], "Patio closed");

        let (status, _) = send(&state, "DELETE", "/api/service-config/2025-06-01", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&state, "DELETE", "/api/service-config/2025-06-01", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 6001);
    }

    #[tokio::test]
    async fn test_service_config_validation() {
        let state = test_state().await;

        let (status, body) = send(
            &state,
            "POST",
            "/api/service-config",
            Some(json!({
                "service_date": "2025-06-01",
                "expected_walk_in_min": 10,
                "expected_walk_in_max": 4
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 6003);

        let (status, _) = send(
            &state,
            "POST",
            "/api/service-config",
            Some(json!({
                "service_date": "2025-06-01",
                "peak_time_start": "21:00",
                "peak_time_end": "19:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&state, "GET", "/api/service-config", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 7);

        let (status, body) = send(
            &state,
            "PUT",
            "/api/service-config/2025-07-01",
            Some(json!({ "notes": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 6001);
    }
}
