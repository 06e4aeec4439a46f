#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub ingredients: Vec<String>,
    pub kitchenware: Vec<String>,
    pub age_group: String,
    pub people: u32,
    pub cuisine: String,
    pub max_calories: Option<u32>,
}
