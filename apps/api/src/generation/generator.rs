//! Variation generation — builds the system instruction and output schema,
//! runs one model round trip, and parses the structured reply.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ServiceError;
use crate::generation::prompts::{
    variation_schema, DEFAULT_PERSONA, GENERATION_SYSTEM_TEMPLATE, GENERATION_TEMPERATURE,
};
use crate::llm_client::{ModelClient, ModelRequest, GEMINI_MODEL};
use crate::models::language::{SocialPlatform, TargetLanguage};

/// One stylistically distinct rewrite of the input text.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Unique within one result set; result sets replace each other wholesale.
    pub id: String,
    pub tone: String,
    pub content: String,
}

/// Request body for variation generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub input_text: String,
    pub target_language: TargetLanguage,
    pub platform: SocialPlatform,
    /// Free text; blank falls back to `DEFAULT_PERSONA`.
    #[serde(default)]
    pub persona: String,
    pub api_key: String,
}

/// Shape the model is asked to return, enforced provider-side by
/// `variation_schema`. A missing or mistyped field fails the whole batch.
#[derive(Debug, Deserialize)]
struct VariationEntry {
    tone: String,
    content: String,
}

/// Runs one generation round trip.
///
/// Preconditions are checked before any network traffic: a blank API key or
/// blank input is a `Config` failure, never a provider error. Transport and
/// parse failures surface to the caller; nothing is retried.
pub async fn generate(
    client: &dyn ModelClient,
    request: &GenerateRequest,
) -> Result<Vec<GenerationResult>, ServiceError> {
    if request.api_key.trim().is_empty() {
        return Err(ServiceError::Config("missing API key".to_string()));
    }
    if request.input_text.trim().is_empty() {
        return Err(ServiceError::Config(
            "input text cannot be empty".to_string(),
        ));
    }

    let instruction =
        build_system_instruction(request.target_language, request.platform, &request.persona);

    let reply = client
        .send(ModelRequest {
            api_key: request.api_key.trim(),
            model: GEMINI_MODEL,
            system_instruction: Some(&instruction),
            prompt: &request.input_text,
            response_schema: Some(variation_schema()),
            temperature: Some(GENERATION_TEMPERATURE),
        })
        .await?;

    let results = parse_variations(&reply)?;
    info!(
        "generated {} variations for {} / {}",
        results.len(),
        request.target_language,
        request.platform
    );

    Ok(results)
}

/// Fills the system instruction template. A blank persona collapses to the
/// default so the model never sees an empty persona slot.
pub(crate) fn build_system_instruction(
    language: TargetLanguage,
    platform: SocialPlatform,
    persona: &str,
) -> String {
    let persona = persona.trim();
    let persona = if persona.is_empty() {
        DEFAULT_PERSONA
    } else {
        persona
    };

    GENERATION_SYSTEM_TEMPLATE
        .replace("{language}", language.label())
        .replace("{platform}", platform.label())
        .replace("{persona}", persona)
}

/// Decodes the model reply as a JSON array of `{tone, content}` objects.
///
/// No heuristic recovery: anything that is not a well-formed array of
/// well-formed entries fails the whole batch. An empty array is a valid
/// empty result set. Ids are derived from the wall clock plus the element
/// index and are unique within the set.
fn parse_variations(reply: &str) -> Result<Vec<GenerationResult>, ServiceError> {
    let entries: Vec<VariationEntry> =
        serde_json::from_str(reply).map_err(|e| ServiceError::Parse(e.to_string()))?;

    let stamp = Utc::now().timestamp_millis();
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| GenerationResult {
            id: format!("result-{stamp}-{index}"),
            tone: entry.tone,
            content: entry.content,
        })
        .collect())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
