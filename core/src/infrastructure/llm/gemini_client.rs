use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::{ports::LLMClient, value_objects::GenerationOptions},
    media::value_objects::ProcessedImage,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    text_model: String,
    vision_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.gemini_api_key,
            text_model: config.gemini_text_model,
            vision_model: config.gemini_vision_model,
            client: Client::new(),
        }
    }

    fn generation_config(options: GenerationOptions) -> GenerationConfig {
        GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: options.response_schema,
            temperature: options.temperature,
        }
    }

    async fn call_gemini_api(&self, model: &str, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_BASE, model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!("Gemini API rate limited: {}", error_text);
            return Err(CoreError::RateLimited(format!(
                "LLM API returned 429: {}",
                error_text
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: Some(Self::generation_config(options)),
        };

        self.call_gemini_api(&self.text_model, request).await
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image: ProcessedImage,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image.data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type,
                            data: base64_image,
                        },
                    },
                ],
            }],
            generation_config: Some(Self::generation_config(options)),
        };

        self.call_gemini_api(&self.vision_model, request).await
    }
}
