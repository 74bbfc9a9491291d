//! HTTP API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/health | GET | 健康检查 |
//! | /api/guests | GET, POST | 宾客 |
//! | /api/reservations | GET, POST | 预订 (?service_date=) |
//! | /api/staff | GET, POST | 员工 |
//! | /api/schedules | GET, POST | 排班 (?service_date=) |
//! | /api/service-config | GET, POST | 营业配置 (?service_date=) |
//! | /api/dashboard/metrics | GET | 当日运营指标 |
//! | /api/briefings/generate | POST | 生成班前简报 |
//!
//! 单条资源统一为 `/{id}` (营业配置为 `/{service_date}`)，支持 GET / PUT / DELETE。

pub mod briefings;
pub mod dashboard;
pub mod guests;
pub mod health;
pub mod reservations;
pub mod schedules;
pub mod service_config;
pub mod staff;

use axum::Router;
use http::HeaderValue;
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::{Config, ServerState};
use crate::utils::{AppError, AppResult, ErrorCode, time};

/// `?service_date=YYYY-MM-DD`
#[derive(Debug, Default, Deserialize)]
pub struct ServiceDateQuery {
    pub service_date: Option<String>,
}

impl ServiceDateQuery {
    /// 可选过滤条件，给出时必须是合法日期
    pub fn optional(&self) -> AppResult<Option<&str>> {
        match self.service_date.as_deref() {
            Some(date) => {
                time::parse_date(date)?;
                Ok(Some(date))
            }
            None => Ok(None),
        }
    }

    /// 必填
    pub fn required(&self) -> AppResult<&str> {
        self.optional()?.ok_or_else(|| {
            AppError::with_message(ErrorCode::RequiredField, "service_date is required")
                .with_detail("field", "service_date")
        })
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(guests::router())
        .merge(reservations::router())
        .merge(staff::router())
        .merge(schedules::router())
        .merge(service_config::router())
        .merge(dashboard::router())
        .merge(briefings::router())
}

/// Build the application with CORS and request tracing
pub fn build_app(config: &Config) -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(cors_layer(&config.cors_origins))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(parsed))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::briefing::{NarrativeGenerator, TemplateNarrator};
    use crate::core::{Config, ServerState};
    use crate::db::DbService;

    pub async fn test_state_with(narrator: Arc<dyn NarrativeGenerator>) -> ServerState {
        let db = DbService::in_memory().await.unwrap();
        ServerState::new(Config::with_work_dir("./unused"), db.pool, narrator)
    }

    pub async fn test_state() -> ServerState {
        test_state_with(Arc::new(TemplateNarrator::new())).await
    }

    /// One request through the full app; returns status and JSON body (Null when empty)
    pub async fn send(
        state: &ServerState,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let app = super::build_app(&state.config).with_state(state.clone());
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
