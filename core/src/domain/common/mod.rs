use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CookSenseConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_text_model: String,
    pub gemini_vision_model: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
