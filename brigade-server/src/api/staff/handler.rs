//! Staff API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::briefing::ServiceDataSource;
use crate::core::ServerState;
use crate::db::repository::staff;
use crate::utils::validation::{MAX_NAME_LEN, validate_amount, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{StaffCreate, StaffMember, StaffPosition, StaffUpdate};

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::StaffNotFound, format!("Staff member {id} not found"))
        .with_detail("id", id)
}

/// GET /api/staff - 获取所有员工 (排班表单的姓名/时薪选择)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<StaffMember>>> {
    let members = state.source.list_staff().await?;
    Ok(Json(members))
}

/// GET /api/staff/:id - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<StaffMember>> {
    let m = staff::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(m))
}

/// POST /api/staff - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<StaffMember>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    payload.position.parse::<StaffPosition>()?;
    validate_amount(payload.hourly_rate, "hourly_rate")?;

    let m = staff::create(&state.pool, payload).await?;
    tracing::info!(staff_id = m.id, position = %m.position, "Staff member created");
    Ok(Json(m))
}

/// PUT /api/staff/:id - 更新员工
///
/// 已有排班保留创建时的职位与时薪快照。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<StaffMember>> {
    if payload.is_empty() {
        return Err(AppError::validation("No fields to update"));
    }
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(position) = &payload.position {
        position.parse::<StaffPosition>()?;
    }
    if let Some(rate) = payload.hourly_rate {
        validate_amount(rate, "hourly_rate")?;
    }

    staff::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let m = staff::update(&state.pool, id, payload).await?;
    Ok(Json(m))
}

/// DELETE /api/staff/:id - 删除员工
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !staff::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(staff_id = id, "Staff member deleted");
    Ok(Json(true))
}
