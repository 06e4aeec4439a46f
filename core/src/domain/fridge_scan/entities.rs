use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ingredient names the vision model recognized in a fridge photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FridgeScanResult {
    pub ingredients: Vec<String>,
}
