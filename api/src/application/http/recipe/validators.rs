use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRecipesRequest {
    #[schema(example = json!(["chicken", "broccoli"]))]
    pub ingredients: Vec<String>,

    #[schema(example = json!(["wok"]))]
    pub kitchenware: Vec<String>,

    #[schema(example = "adult")]
    pub age_group: String,

    #[validate(range(min = 1, message = "people must be at least 1"))]
    #[schema(example = 2)]
    pub people: u32,

    #[schema(example = "western")]
    pub cuisine: String,

    #[validate(range(min = 1, message = "maxCalories must be positive"))]
    pub max_calories: Option<u32>,
}

impl Default for GenerateRecipesRequest {
    fn default() -> Self {
        Self {
            ingredients: Vec::new(),
            kitchenware: Vec::new(),
            age_group: "adult".to_string(),
            people: 1,
            cuisine: "western".to_string(),
            max_calories: None,
        }
    }
}
