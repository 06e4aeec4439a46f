use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    fridge_scan::{
        entities::FridgeScanResult, helpers::build_fridge_scan_prompt, ports::FridgeScanService,
        schema::get_fridge_scan_schema, value_objects::ScanFridgeInput,
    },
    llm::{
        helpers::{classify_upstream_error, parse_json_lenient},
        ports::LLMClient,
        value_objects::GenerationOptions,
    },
    media::ports::ImagePreprocessor,
};

pub const FRIDGE_SCAN_MAX_DIMENSION: u32 = 640;
pub const FRIDGE_SCAN_JPEG_QUALITY: u8 = 70;
const FRIDGE_SCAN_TEMPERATURE: f32 = 0.2;

impl<LLM, IMG> FridgeScanService for Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImagePreprocessor,
{
    async fn scan_fridge(&self, input: ScanFridgeInput) -> Result<FridgeScanResult, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::MissingInput("image upload is empty".to_string()));
        }

        let request_id = generate_uuid_v7();
        let image = self.image_preprocessor.downscale(
            &input.image_data,
            FRIDGE_SCAN_MAX_DIMENSION,
            FRIDGE_SCAN_JPEG_QUALITY,
        )?;
        tracing::debug!(
            %request_id,
            width = image.width,
            height = image.height,
            "scanning fridge photo"
        );

        let options = GenerationOptions::json(FRIDGE_SCAN_TEMPERATURE, get_fridge_scan_schema());
        let raw = self
            .llm_client
            .generate_with_image(build_fridge_scan_prompt(), image, options)
            .await
            .map_err(classify_upstream_error)?;

        let value = parse_json_lenient(&raw)?;
        let result: FridgeScanResult = serde_json::from_value(value).map_err(|e| {
            CoreError::MalformedModelOutput(format!("unexpected ingredient payload: {e}"))
        })?;

        tracing::info!(%request_id, count = result.ingredients.len(), "fridge scan complete");
        Ok(result)
    }
}
