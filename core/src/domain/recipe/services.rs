use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    llm::{
        helpers::parse_json_lenient,
        ports::LLMClient,
        value_objects::GenerationOptions,
    },
    media::ports::ImagePreprocessor,
    recipe::{
        entities::Recipe, helpers::build_recipe_prompt, ports::RecipeService,
        schema::get_recipe_list_schema, value_objects::GenerateRecipesInput,
    },
};

const RECIPE_TEMPERATURE: f32 = 0.2;

impl<LLM, IMG> RecipeService for Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImagePreprocessor,
{
    /// Generates three recipe suggestions. Every failure past input
    /// validation degrades to an empty list so the front-end never sees an
    /// error from this endpoint.
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<Vec<Recipe>, CoreError> {
        if input.ingredients.is_empty() {
            return Ok(Vec::new());
        }

        let request_id = generate_uuid_v7();
        let prompt = build_recipe_prompt(&input);
        let options = GenerationOptions::json(RECIPE_TEMPERATURE, get_recipe_list_schema());

        let raw = match self.llm_client.generate_with_text(prompt, options).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(%request_id, "recipe generation failed: {}", err);
                return Ok(Vec::new());
            }
        };

        let value = match parse_json_lenient(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(%request_id, "recipe response is not JSON: {}", err);
                return Ok(Vec::new());
            }
        };

        match serde_json::from_value::<Vec<Recipe>>(value) {
            Ok(recipes) => Ok(recipes),
            Err(err) => {
                tracing::error!(%request_id, "recipe response has unexpected shape: {}", err);
                Ok(Vec::new())
            }
        }
    }
}
