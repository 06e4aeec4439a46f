use serde_json::json;

/// Returns the JSON schema for calorie-estimation LLM responses
pub fn get_calorie_estimate_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "food_name": { "type": "string" },
            "estimated_calories": { "type": "integer" },
            "reasoning": { "type": "string" }
        },
        "required": ["food_name", "estimated_calories", "reasoning"]
    })
}
