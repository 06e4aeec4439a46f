use super::handlers::analyze_calories::{__path_analyze_calories, analyze_calories};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_calories))]
pub struct CalorieAnalysisApiDoc;

pub fn calorie_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyze-calories", state.args.server.root_path),
        post(analyze_calories),
    )
}
