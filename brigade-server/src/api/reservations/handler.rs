//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::ServiceDateQuery;
use crate::core::ServerState;
use crate::db::repository::{guest, reservation};
use crate::utils::time;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text, validate_party_size};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};

fn not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::ReservationNotFound,
        format!("Reservation {id} not found"),
    )
    .with_detail("id", id)
}

async fn ensure_guest(state: &ServerState, guest_id: i64) -> AppResult<()> {
    guest::find_by_id(&state.pool, guest_id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::GuestNotFound, format!("Guest {guest_id} not found"))
            .with_detail("guest_id", guest_id)
    })?;
    Ok(())
}

/// GET /api/reservations?service_date= - 获取预订列表 (按到店时间排序)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ServiceDateQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = reservation::find_all(&state.pool, query.optional()?).await?;
    Ok(Json(reservations))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reservation>> {
    let r = reservation::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(r))
}

/// POST /api/reservations - 创建预订
///
/// guest_name 取自当前宾客记录的快照。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    time::parse_date(&payload.service_date)?;
    time::parse_time(&payload.time, "time")?;
    validate_party_size(payload.party_size)?;
    if let Some(status) = &payload.status {
        status.parse::<ReservationStatus>()?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    ensure_guest(&state, payload.guest_id).await?;

    let r = reservation::create(&state.pool, payload).await?;
    tracing::info!(
        reservation_id = r.id,
        service_date = %r.service_date,
        party_size = r.party_size,
        "Reservation created"
    );
    Ok(Json(r))
}

/// PUT /api/reservations/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    if payload.is_empty() {
        return Err(AppError::validation("No fields to update"));
    }
    if let Some(date) = &payload.service_date {
        time::parse_date(date)?;
    }
    if let Some(t) = &payload.time {
        time::parse_time(t, "time")?;
    }
    if let Some(size) = payload.party_size {
        validate_party_size(size)?;
    }
    if let Some(status) = &payload.status {
        status.parse::<ReservationStatus>()?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    reservation::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(guest_id) = payload.guest_id {
        ensure_guest(&state, guest_id).await?;
    }

    let r = reservation::update(&state.pool, id, payload).await?;
    Ok(Json(r))
}

/// DELETE /api/reservations/:id - 删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !reservation::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(Json(true))
}
