use axum::extract::State;

use crate::application::http::{
    recipe::validators::GenerateRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cooksense_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipesInput,
};

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipes",
    summary = "Generate recipes",
    description = "Generates three recipe suggestions from the supplied ingredients using the LLM. \
                   Internal failures degrade to an empty array.",
    responses(
        (status = 200, body = Vec<Recipe>)
    ),
    request_body = GenerateRecipesRequest
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesRequest>,
) -> Result<Response<Vec<Recipe>>, ApiError> {
    let recipes = state
        .service
        .generate_recipes(GenerateRecipesInput {
            ingredients: payload.ingredients,
            kitchenware: payload.kitchenware,
            age_group: payload.age_group,
            people: payload.people,
            cuisine: payload.cuisine,
            max_calories: payload.max_calories,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipes))
}
