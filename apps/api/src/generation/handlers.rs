//! Axum route handlers for the generation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate, GenerateRequest, GenerationResult};
use crate::llm_client::GEMINI_MODEL;
use crate::models::language::{
    SocialPlatform, SystemLanguage, TargetLanguage, PREDEFINED_PERSONAS,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub results: Vec<GenerationResult>,
    pub generated_at: DateTime<Utc>,
    pub model: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlatformOption {
    pub value: SocialPlatform,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub value: TargetLanguage,
    pub label: &'static str,
    /// Platforms a picker should offer for this language. The generation
    /// endpoint itself accepts any language/platform pairing.
    pub platforms: Vec<PlatformOption>,
}

#[derive(Debug, Serialize)]
pub struct SystemLanguageOption {
    pub value: SystemLanguage,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub languages: Vec<LanguageOption>,
    pub system_languages: Vec<SystemLanguageOption>,
    pub personas: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/variations
///
/// Runs one generation round trip and returns the parsed variations.
/// Each call produces a fresh result set; clients replace, never merge.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let results = generate(state.llm.as_ref(), &request).await?;

    Ok(Json(GenerateResponse {
        results,
        generated_at: Utc::now(),
        model: GEMINI_MODEL,
    }))
}

/// GET /api/v1/options
///
/// Everything a client needs to populate its controls: target languages with
/// their relevant platforms, display languages, and the canned personas.
pub async fn handle_get_options() -> Json<OptionsResponse> {
    let languages = TargetLanguage::ALL
        .iter()
        .map(|lang| LanguageOption {
            value: *lang,
            label: lang.label(),
            platforms: lang
                .relevant_platforms()
                .iter()
                .map(|platform| PlatformOption {
                    value: *platform,
                    label: platform.label(),
                })
                .collect(),
        })
        .collect();

    let system_languages = SystemLanguage::ALL
        .iter()
        .map(|lang| SystemLanguageOption {
            value: *lang,
            label: lang.label(),
        })
        .collect();

    Json(OptionsResponse {
        languages,
        system_languages,
        personas: &PREDEFINED_PERSONAS,
    })
}
