use super::handlers::generate_recipes::{__path_generate_recipes, generate_recipes};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/generate", state.args.server.root_path),
        post(generate_recipes),
    )
}
