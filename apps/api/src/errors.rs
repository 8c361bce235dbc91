use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::ModelError;

/// Errors produced by the generation and explanation services.
///
/// `Config` is a local precondition failure raised before any network
/// traffic. `Parse` means the model replied but the reply did not match the
/// agreed JSON contract. `Transport` covers everything the provider or the
/// network did wrong. None of these are ever retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    Config(String),

    #[error("model reply did not match the expected shape: {0}")]
    Parse(String),

    #[error("model call failed: {0}")]
    Transport(String),
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        // Provider failure kinds all collapse here; only the human-readable
        // message crosses the boundary.
        ServiceError::Transport(err.to_string())
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model parse error: {0}")]
    ModelParse(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Config(msg) => AppError::Validation(msg),
            ServiceError::Parse(msg) => AppError::ModelParse(msg),
            ServiceError::Transport(msg) => AppError::Model(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ModelParse(msg) => {
                tracing::error!("Model parse error: {msg}");
                (StatusCode::BAD_GATEWAY, "MODEL_PARSE_ERROR", msg.clone())
            }
            AppError::Model(msg) => {
                tracing::error!("Model error: {msg}");
                (StatusCode::BAD_GATEWAY, "MODEL_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
