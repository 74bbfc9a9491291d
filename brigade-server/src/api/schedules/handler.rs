//! Schedule API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::ServiceDateQuery;
use crate::core::ServerState;
use crate::db::repository::{schedule, staff};
use crate::utils::time;
use crate::utils::validation::{MAX_NOTE_LEN, validate_amount, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Schedule, ScheduleCreate, ScheduleUpdate};

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ScheduleNotFound, format!("Schedule {id} not found"))
        .with_detail("id", id)
}

/// GET /api/schedules?service_date= - 获取排班列表 (按上班时间排序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ServiceDateQuery>,
) -> AppResult<Json<Vec<Schedule>>> {
    let schedules = schedule::find_all(&state.pool, query.optional()?).await?;
    Ok(Json(schedules))
}

/// GET /api/schedules/:id - 获取单个排班
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Schedule>> {
    let s = schedule::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(s))
}

/// POST /api/schedules - 创建排班
///
/// 员工姓名、职位、时薪取自当前员工记录；工时由服务端计算。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ScheduleCreate>,
) -> AppResult<Json<Schedule>> {
    time::parse_date(&payload.service_date)?;
    time::shift_hours(&payload.shift_start, &payload.shift_end)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    staff::find_by_id(&state.pool, payload.staff_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::StaffNotFound,
                format!("Staff member {} not found", payload.staff_id),
            )
            .with_detail("staff_id", payload.staff_id)
        })?;

    let s = schedule::create(&state.pool, payload).await?;
    tracing::info!(
        schedule_id = s.id,
        service_date = %s.service_date,
        hours = s.scheduled_hours,
        "Schedule created"
    );
    Ok(Json(s))
}

/// PUT /api/schedules/:id - 更新排班
///
/// 修改任一时间都会重新计算工时。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ScheduleUpdate>,
) -> AppResult<Json<Schedule>> {
    if payload.is_empty() {
        return Err(AppError::validation("No fields to update"));
    }
    if let Some(date) = &payload.service_date {
        time::parse_date(date)?;
    }
    if let Some(rate) = payload.hourly_rate {
        validate_amount(rate, "hourly_rate")?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let existing = schedule::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let start = payload.shift_start.as_deref().unwrap_or(&existing.shift_start);
    let end = payload.shift_end.as_deref().unwrap_or(&existing.shift_end);
    time::shift_hours(start, end)?;

    let s = schedule::update(&state.pool, id, payload).await?;
    Ok(Json(s))
}

/// DELETE /api/schedules/:id - 删除排班
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !schedule::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(Json(true))
}
