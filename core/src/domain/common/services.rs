use crate::domain::{llm::ports::LLMClient, media::ports::ImagePreprocessor};

/// Application service, generic over the outbound ports so tests can swap in
/// mocks. Feature services are implemented as trait impls over this struct.
#[derive(Debug, Clone)]
pub struct Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImagePreprocessor,
{
    pub(crate) llm_client: LLM,
    pub(crate) image_preprocessor: IMG,
}

impl<LLM, IMG> Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImagePreprocessor,
{
    pub fn new(llm_client: LLM, image_preprocessor: IMG) -> Self {
        Self {
            llm_client,
            image_preprocessor,
        }
    }
}
