#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Sampling temperature; kept low for reproducible output.
    pub temperature: f32,
    /// JSON schema the provider is asked to constrain its output to
    /// ("JSON mode").
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationOptions {
    pub fn json(temperature: f32, response_schema: serde_json::Value) -> Self {
        Self {
            temperature,
            response_schema: Some(response_schema),
        }
    }
}
