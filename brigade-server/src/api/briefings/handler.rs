//! Briefing API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Briefing, BriefingRequest};

/// POST /api/briefings/generate - 生成班前简报
///
/// 不缓存；同一日期重复请求会重新生成。
pub async fn generate(
    State(state): State<ServerState>,
    Json(payload): Json<BriefingRequest>,
) -> AppResult<Json<Briefing>> {
    let briefing = state.briefing.generate(&payload.service_date).await?;
    Ok(Json(briefing))
}
