use serde_json::json;

/// Returns the JSON schema for recipe-generation LLM responses
pub fn get_recipe_list_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "integer" },
                "name": { "type": "string" },
                "difficulty": { "type": "string" },
                "time": { "type": "string" },
                "portions": { "type": "integer" },
                "standard": {
                    "type": "object",
                    "properties": {
                        "calories": { "type": "integer" },
                        "desc": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "steps": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["calories", "desc", "ingredients", "steps"]
                },
                "healthy": {
                    "type": "object",
                    "properties": {
                        "calories": { "type": "integer" },
                        "desc": { "type": "string" },
                        "adjustments": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "steps": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["calories", "desc", "adjustments", "steps"]
                },
                "substitutions": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "missing": { "type": "string" },
                            "suggestion": { "type": "string" }
                        },
                        "required": ["missing", "suggestion"]
                    }
                }
            },
            "required": [
                "id", "name", "difficulty", "time", "portions",
                "standard", "healthy", "substitutions"
            ]
        }
    })
}
