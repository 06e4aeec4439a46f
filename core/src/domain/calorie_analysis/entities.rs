use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The vision model's calorie estimate for a photographed dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalorieEstimate {
    pub food_name: String,
    pub estimated_calories: u32,
    pub reasoning: String,
}
