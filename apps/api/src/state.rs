use std::sync::Arc;

use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Deliberately small: the model credential is NOT here. It arrives with
/// every request and is owned by the caller, so nothing credential-shaped
/// ever lives in process-wide state.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model client. Production wires `GeminiClient`; tests use mocks.
    pub llm: Arc<dyn ModelClient>,
}
