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
    common::entities::app_errors::CoreError,
    fridge_scan::{ports::FridgeScanService, value_objects::ScanFridgeInput},
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanFridgeResponse {
    pub ingredients: Vec<String>,
}

/// Failure envelope: the front-end always receives an `ingredients` field,
/// even on error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScanFridgeErrorBody {
    pub error: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug)]
pub struct ScanFridgeError(ApiError);

impl From<ApiError> for ScanFridgeError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<CoreError> for ScanFridgeError {
    fn from(err: CoreError) -> Self {
        Self(ApiError::from(err))
    }
}

impl IntoResponse for ScanFridgeError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        let body = ScanFridgeErrorBody {
            error: self.0.to_string(),
            ingredients: Vec::new(),
        };
        (status, Json(body)).into_response()
    }
}

#[utoipa::path(
    post,
    path = "/scan-fridge",
    tag = "fridge-scan",
    summary = "Scan a fridge photo for ingredients",
    description = "Extracts ingredient names from an uploaded fridge photo using LLM vision",
    responses(
        (status = 200, body = ScanFridgeResponse),
        (status = 400, body = ScanFridgeErrorBody),
        (status = 429, body = ScanFridgeErrorBody),
        (status = 500, body = ScanFridgeErrorBody),
    ),
)]
pub async fn scan_fridge(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanFridgeResponse>, ScanFridgeError> {
    let image_data = read_image_field(&mut multipart).await?;

    let result = state
        .service
        .scan_fridge(ScanFridgeInput { image_data })
        .await?;

    Ok(Response::OK(ScanFridgeResponse {
        ingredients: result.ingredients,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn rate_limited_error_maps_to_429_with_empty_ingredients() {
        let error = ScanFridgeError::from(CoreError::RateLimited("quota exceeded".to_string()));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["ingredients"], serde_json::json!([]));
        assert!(body["error"].as_str().unwrap().contains("try again"));
    }

    #[tokio::test]
    async fn missing_input_maps_to_400() {
        let error = ScanFridgeError::from(CoreError::MissingInput("image".to_string()));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_500() {
        let error =
            ScanFridgeError::from(CoreError::ExternalServiceError("boom".to_string()));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
