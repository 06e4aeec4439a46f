use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, llm::value_objects::GenerationOptions,
    media::value_objects::ProcessedImage,
};

/// Client trait for calling the generative-AI model provider
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        prompt: String,
        image: ProcessedImage,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
