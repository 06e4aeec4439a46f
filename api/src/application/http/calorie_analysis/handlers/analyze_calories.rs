use axum::{
    Json,
    extract::{Multipart, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
    multipart::read_image_field,
};
use cooksense_core::domain::{
    calorie_analysis::{
        entities::CalorieEstimate, ports::CalorieAnalysisService,
        value_objects::AnalyzeCaloriesInput,
    },
    common::entities::app_errors::CoreError,
};

/// Failure envelope: the front-end always receives an `estimated_calories`
/// field, zeroed on error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeCaloriesErrorBody {
    pub error: String,
    pub estimated_calories: u32,
}

#[derive(Debug)]
pub struct AnalyzeCaloriesError(ApiError);

impl From<ApiError> for AnalyzeCaloriesError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<CoreError> for AnalyzeCaloriesError {
    fn from(err: CoreError) -> Self {
        Self(ApiError::from(err))
    }
}

impl IntoResponse for AnalyzeCaloriesError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        let body = AnalyzeCaloriesErrorBody {
            error: self.0.to_string(),
            estimated_calories: 0,
        };
        (status, Json(body)).into_response()
    }
}

#[utoipa::path(
    post,
    path = "/analyze-calories",
    tag = "calorie-analysis",
    summary = "Estimate calories from a meal photo",
    description = "Identifies the food on an uploaded photo and estimates its total calories \
                   using LLM vision",
    responses(
        (status = 200, body = CalorieEstimate),
        (status = 400, body = AnalyzeCaloriesErrorBody),
        (status = 429, body = AnalyzeCaloriesErrorBody),
        (status = 500, body = AnalyzeCaloriesErrorBody),
    ),
)]
pub async fn analyze_calories(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<CalorieEstimate>, AnalyzeCaloriesError> {
    let image_data = read_image_field(&mut multipart).await?;

    let estimate = state
        .service
        .analyze_calories(AnalyzeCaloriesInput { image_data })
        .await?;

    Ok(Response::OK(estimate))
}
