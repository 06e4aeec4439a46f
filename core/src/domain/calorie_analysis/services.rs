use crate::domain::{
    calorie_analysis::{
        entities::CalorieEstimate, helpers::build_calorie_prompt, ports::CalorieAnalysisService,
        schema::get_calorie_estimate_schema, value_objects::AnalyzeCaloriesInput,
    },
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    llm::{
        helpers::{classify_upstream_error, parse_json_lenient},
        ports::LLMClient,
        value_objects::GenerationOptions,
    },
    media::ports::ImagePreprocessor,
};

pub const CALORIE_MAX_DIMENSION: u32 = 800;
pub const CALORIE_JPEG_QUALITY: u8 = 75;
const CALORIE_TEMPERATURE: f32 = 0.2;

impl<LLM, IMG> CalorieAnalysisService for Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImagePreprocessor,
{
    async fn analyze_calories(
        &self,
        input: AnalyzeCaloriesInput,
    ) -> Result<CalorieEstimate, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::MissingInput("image upload is empty".to_string()));
        }

        let request_id = generate_uuid_v7();
        let image = self.image_preprocessor.downscale(
            &input.image_data,
            CALORIE_MAX_DIMENSION,
            CALORIE_JPEG_QUALITY,
        )?;
        tracing::debug!(
            %request_id,
            width = image.width,
            height = image.height,
            "analyzing meal photo"
        );

        let options = GenerationOptions::json(CALORIE_TEMPERATURE, get_calorie_estimate_schema());
        let raw = self
            .llm_client
            .generate_with_image(build_calorie_prompt(), image, options)
            .await
            .map_err(classify_upstream_error)?;

        let value = parse_json_lenient(&raw)?;
        let estimate: CalorieEstimate = serde_json::from_value(value).map_err(|e| {
            CoreError::MalformedModelOutput(format!("unexpected calorie payload: {e}"))
        })?;

        tracing::info!(
            %request_id,
            food_name = %estimate.food_name,
            estimated_calories = estimate.estimated_calories,
            "calorie analysis complete"
        );
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        llm::ports::MockLLMClient,
        media::{ports::MockImagePreprocessor, value_objects::ProcessedImage},
    };

    fn preprocessor() -> MockImagePreprocessor {
        let mut img = MockImagePreprocessor::new();
        img.expect_downscale().returning(|_, _, _| {
            Ok(ProcessedImage {
                data: vec![0xFF, 0xD8],
                mime_type: "image/jpeg".to_string(),
                width: 800,
                height: 600,
            })
        });
        img
    }

    fn input() -> AnalyzeCaloriesInput {
        AnalyzeCaloriesInput {
            image_data: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn empty_upload_is_rejected_before_any_processing() {
        let service = Service::new(MockLLMClient::new(), MockImagePreprocessor::new());

        let err = service
            .analyze_calories(AnalyzeCaloriesInput { image_data: vec![] })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::MissingInput(_)));
    }

    #[tokio::test]
    async fn valid_response_is_deserialized() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async {
                Ok("{\"food_name\": \"ramen\", \"estimated_calories\": 650, \
                    \"reasoning\": \"A full bowl with pork and egg.\"}"
                    .to_string())
            })
        });

        let service = Service::new(llm, preprocessor());
        let estimate = service.analyze_calories(input()).await.unwrap();

        assert_eq!(estimate.food_name, "ramen");
        assert_eq!(estimate.estimated_calories, 650);
    }

    #[tokio::test]
    async fn image_is_downscaled_with_calorie_bounds() {
        let mut img = MockImagePreprocessor::new();
        img.expect_downscale()
            .withf(|_, max_dimension, quality| {
                *max_dimension == CALORIE_MAX_DIMENSION && *quality == CALORIE_JPEG_QUALITY
            })
            .returning(|_, _, _| {
                Ok(ProcessedImage {
                    data: vec![0xFF, 0xD8],
                    mime_type: "image/jpeg".to_string(),
                    width: 800,
                    height: 450,
                })
            });

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async {
                Ok("{\"food_name\": \"salad\", \"estimated_calories\": 180, \
                    \"reasoning\": \"Leafy greens with dressing.\"}"
                    .to_string())
            })
        });

        let service = Service::new(llm, img);
        service.analyze_calories(input()).await.unwrap();
    }

    #[tokio::test]
    async fn upstream_429_surfaces_as_rate_limited() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "status RESOURCE_EXHAUSTED: quota exceeded".to_string(),
                ))
            })
        });

        let service = Service::new(llm, preprocessor());
        let err = service.analyze_calories(input()).await.unwrap_err();

        assert!(matches!(err, CoreError::RateLimited(_)));
    }
}
