//! Briefing API 模块 - 班前简报

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/briefings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/generate", post(handler::generate))
}
