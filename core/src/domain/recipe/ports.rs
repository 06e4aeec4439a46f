use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, value_objects::GenerateRecipesInput},
};

/// Service trait for recipe generation business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
