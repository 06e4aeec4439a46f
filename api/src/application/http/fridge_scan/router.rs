use super::handlers::scan_fridge::{__path_scan_fridge, scan_fridge};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(scan_fridge))]
pub struct FridgeScanApiDoc;

pub fn fridge_scan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/scan-fridge", state.args.server.root_path),
        post(scan_fridge),
    )
}
