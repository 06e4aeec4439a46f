use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("model returned malformed output: {0}")]
    MalformedModelOutput(String),

    #[error("model provider rate limited: {0}")]
    RateLimited(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("image processing failed: {0}")]
    ImageProcessing(String),

    #[error("internal server error")]
    InternalServerError,
}
