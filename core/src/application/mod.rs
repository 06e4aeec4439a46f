use crate::{
    domain::common::{CookSenseConfig, services::Service},
    infrastructure::{
        llm::gemini_client::GeminiLLMClient, media::jpeg_preprocessor::JpegImagePreprocessor,
    },
};

pub type CookSenseService = Service<GeminiLLMClient, JpegImagePreprocessor>;

pub async fn create_service(config: CookSenseConfig) -> Result<CookSenseService, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(config.llm);
    let image_preprocessor = JpegImagePreprocessor::new();

    Ok(Service::new(llm_client, image_preprocessor))
}
