use std::future::Future;

use crate::domain::{
    calorie_analysis::{entities::CalorieEstimate, value_objects::AnalyzeCaloriesInput},
    common::entities::app_errors::CoreError,
};

/// Service trait for calorie-estimation business logic
#[cfg_attr(test, mockall::automock)]
pub trait CalorieAnalysisService: Send + Sync {
    fn analyze_calories(
        &self,
        input: AnalyzeCaloriesInput,
    ) -> impl Future<Output = Result<CalorieEstimate, CoreError>> + Send;
}
