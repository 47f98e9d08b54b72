use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The hosted model. `LlmClient` in production, a canned model in tests.
    pub model: Arc<dyn GenerativeModel>,
    pub config: Config,
}
