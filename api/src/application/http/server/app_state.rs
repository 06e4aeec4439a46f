use std::sync::Arc;
use std::time::Instant;

use cooksense_core::application::CookSenseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CookSenseService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CookSenseService) -> Self {
        Self {
            args,
            service,
            started_at: Instant::now(),
        }
    }
}
