use std::sync::Arc;

use dxm_ai::AiGateway;
use dxm_core::error::CoreError;
use dxm_db::store::SubmissionStore;

use crate::config::ServerConfig;

/// Returned by the AI endpoints when no API key was configured.
pub const AI_NOT_CONFIGURED: &str = "OpenAI API key not configured";

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. The store and gateway are selected once at start-up
/// and never swapped afterwards.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SubmissionStore>,
    /// `None` when `OPENAI_API_KEY` is not set.
    pub ai: Option<Arc<dyn AiGateway>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The configured AI gateway, or a configuration error.
    pub fn ai_gateway(&self) -> Result<&dyn AiGateway, CoreError> {
        self.ai
            .as_deref()
            .ok_or_else(|| CoreError::Configuration(AI_NOT_CONFIGURED.to_string()))
    }
}
