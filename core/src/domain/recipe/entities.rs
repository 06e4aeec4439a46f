use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One recipe suggestion as produced by the model: a standard variant, a
/// healthier variant of the same dish, and substitutions for ingredients the
/// user may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub difficulty: String,
    pub time: String,
    pub portions: u32,
    pub standard: StandardVariant,
    pub healthy: HealthyVariant,
    pub substitutions: Vec<Substitution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandardVariant {
    pub calories: u32,
    pub desc: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthyVariant {
    pub calories: u32,
    pub desc: String,
    pub adjustments: Vec<String>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Substitution {
    pub missing: String,
    pub suggestion: String,
}
