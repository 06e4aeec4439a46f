use clap::Parser;
use cooksense_core::domain::common::{CookSenseConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "cooksense-api", about = "CookSense API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Directory the static front-end is served from.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_TEXT_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_text_model: String,

    #[arg(long, env = "GEMINI_VISION_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_vision_model: String,
}

impl From<Args> for CookSenseConfig {
    fn from(args: Args) -> Self {
        CookSenseConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_text_model: args.llm.gemini_text_model,
                gemini_vision_model: args.llm.gemini_vision_model,
            },
        }
    }
}
