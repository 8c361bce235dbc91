//! Axum route handlers for the explanation API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::errors::{AppError, ServiceError};
use crate::explanation::explainer::{explain, fallback_message, ExplainRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
    /// True when the explanation is the localized failure sentence rather
    /// than model output.
    pub fallback: bool,
}

/// POST /api/v1/explanations
///
/// Explains a highlighted phrase. Provider failures degrade to a localized
/// fallback sentence with a 200 status, so a failed explanation never
/// disturbs generation results already rendered. Local precondition failures
/// are still client errors.
pub async fn handle_explain(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, AppError> {
    match explain(state.llm.as_ref(), &request).await {
        Ok(explanation) => Ok(Json(ExplainResponse {
            explanation,
            fallback: false,
        })),
        Err(ServiceError::Config(msg)) => Err(AppError::Validation(msg)),
        Err(err) => {
            warn!("explanation failed, serving fallback: {err}");
            Ok(Json(ExplainResponse {
                explanation: fallback_message(request.explanation_language).to_string(),
                fallback: true,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_response_serialization() {
        let response = ExplainResponse {
            explanation: "A warm term of address.".to_string(),
            fallback: false,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["explanation"], "A warm term of address.");
        assert_eq!(value["fallback"], false);
    }
}
