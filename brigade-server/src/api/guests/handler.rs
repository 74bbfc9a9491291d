//! Guest API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::briefing::ServiceDataSource;
use crate::core::ServerState;
use crate::db::repository::guest;
use crate::utils::time;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_amount,
    validate_non_negative, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Guest, GuestCreate, GuestUpdate};

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::GuestNotFound, format!("Guest {id} not found"))
        .with_detail("id", id)
}

fn validate_contact(
    phone: &Option<String>,
    email: &Option<String>,
    last_visit: &Option<String>,
    preferences: &Option<String>,
    notes: &Option<String>,
) -> AppResult<()> {
    validate_optional_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(preferences, "preferences", MAX_NOTE_LEN)?;
    validate_optional_text(notes, "notes", MAX_NOTE_LEN)?;
    if let Some(date) = last_visit {
        time::parse_date(date)?;
    }
    Ok(())
}

/// GET /api/guests - 获取所有宾客 (预订表单的宾客选择)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Guest>>> {
    let guests = state.source.list_guests().await?;
    Ok(Json(guests))
}

/// GET /api/guests/:id - 获取单个宾客
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Guest>> {
    let g = guest::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(g))
}

/// POST /api/guests - 创建宾客
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GuestCreate>,
) -> AppResult<Json<Guest>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_contact(
        &payload.phone,
        &payload.email,
        &payload.last_visit,
        &payload.preferences,
        &payload.notes,
    )?;
    validate_non_negative(payload.total_visits, "total_visits")?;
    validate_amount(payload.total_spend, "total_spend")?;

    let g = guest::create(&state.pool, payload).await?;
    tracing::info!(guest_id = g.id, "Guest created");
    Ok(Json(g))
}

/// PUT /api/guests/:id - 更新宾客
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<GuestUpdate>,
) -> AppResult<Json<Guest>> {
    if payload.is_empty() {
        return Err(AppError::validation("No fields to update"));
    }
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_contact(
        &payload.phone,
        &payload.email,
        &payload.last_visit,
        &payload.preferences,
        &payload.notes,
    )?;
    if let Some(visits) = payload.total_visits {
        validate_non_negative(visits, "total_visits")?;
    }
    if let Some(spend) = payload.total_spend {
        validate_amount(spend, "total_spend")?;
    }

    guest::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let g = guest::update(&state.pool, id, payload).await?;
    Ok(Json(g))
}

/// DELETE /api/guests/:id - 删除宾客
///
/// 已有预订保留快照中的宾客姓名。
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !guest::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(guest_id = id, "Guest deleted");
    Ok(Json(true))
}
