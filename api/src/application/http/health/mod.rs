use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
