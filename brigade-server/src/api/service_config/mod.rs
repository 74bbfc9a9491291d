//! Service Config API 模块
//!
//! 每个营业日最多一条配置，以 service_date 作为路径键。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/service-config", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_by_date).post(handler::create))
        .route(
            "/{service_date}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
}
