use serde_json::json;

/// Returns the JSON schema for fridge-scan LLM responses
pub fn get_fridge_scan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["ingredients"]
    })
}
