//! Dashboard API Handlers

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::ServiceDateQuery;
use crate::briefing::compute_metrics;
use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::ServiceMetrics;

/// GET /api/dashboard/metrics?service_date= - 当日运营指标
///
/// 每次请求完整重算。
pub async fn metrics(
    State(state): State<ServerState>,
    Query(query): Query<ServiceDateQuery>,
) -> AppResult<Json<ServiceMetrics>> {
    let date = query.required()?;
    let metrics = compute_metrics(state.source.as_ref(), date).await?;
    Ok(Json(metrics))
}
