#[derive(Debug, Clone)]
pub struct AnalyzeCaloriesInput {
    pub image_data: Vec<u8>,
}
