use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

const RATE_LIMIT_MARKERS: [&str; 2] = ["429", "RESOURCE_EXHAUSTED"];

/// Strips a surrounding markdown code fence (``` or ```json) from model
/// output. Returns the input trimmed when no fence is present.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) on the opening fence line.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parses model output as JSON, retrying once with markdown code fences
/// stripped before giving up.
pub fn parse_json_lenient(raw: &str) -> Result<Value, CoreError> {
    if let Ok(value) = serde_json::from_str(raw) {
        return Ok(value);
    }

    serde_json::from_str(strip_code_fences(raw)).map_err(|e| {
        CoreError::MalformedModelOutput(format!("model output is not valid JSON: {e}"))
    })
}

pub fn is_rate_limit_marker(message: &str) -> bool {
    RATE_LIMIT_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

/// Promotes upstream errors whose text carries a rate-limit marker to
/// [`CoreError::RateLimited`] so the HTTP layer can answer 429.
pub fn classify_upstream_error(err: CoreError) -> CoreError {
    match err {
        CoreError::ExternalServiceError(message) if is_rate_limit_marker(&message) => {
            CoreError::RateLimited(message)
        }
        other => other,
    }
}
