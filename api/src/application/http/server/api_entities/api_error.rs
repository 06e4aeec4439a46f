use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use validator::Validate;

use cooksense_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("validation error: {0}")]
    ValidationError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingInput(msg) | CoreError::InvalidInput(msg) => {
                ApiError::BadRequest(msg)
            }
            CoreError::RateLimited(_) => ApiError::RateLimited(
                "The AI service is receiving too many requests right now. \
                 Please try again in a moment."
                    .to_string(),
            ),
            CoreError::MalformedModelOutput(msg)
            | CoreError::ExternalServiceError(msg)
            | CoreError::ImageProcessing(msg) => ApiError::InternalServerError(msg),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// JSON extractor that runs `validator` rules after deserialization.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(payload))
    }
}
