use crate::application::http::{
    calorie_analysis::router::CalorieAnalysisApiDoc, fridge_scan::router::FridgeScanApiDoc,
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CookSense API"
    ),
    nest(
        (path = "/", api = RecipeApiDoc),
        (path = "/", api = FridgeScanApiDoc),
        (path = "/", api = CalorieAnalysisApiDoc),
    )
)]
pub struct ApiDoc;
