pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::explanation::handlers as explanation;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/options", get(generation::handle_get_options))
        .route("/api/v1/variations", post(generation::handle_generate))
        .route("/api/v1/explanations", post(explanation::handle_explain))
        .with_state(state)
}
