/// Model client — the single point of entry for all Gemini API calls in
/// NativeFluency.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all generation and explanation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication rejected by provider: {0}")]
    Auth(String),

    #[error("rate limited by provider: {0}")]
    RateLimited(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One round trip to the model provider.
///
/// The API key travels with every request and is never stored on the client;
/// the caller owns its storage and lifetime.
#[derive(Debug, Clone)]
pub struct ModelRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    /// System-level instruction, separate from the user prompt.
    pub system_instruction: Option<&'a str>,
    /// The user-facing prompt or content to send.
    pub prompt: &'a str,
    /// When set, the provider is asked for schema-validated JSON output.
    pub response_schema: Option<Value>,
    pub temperature: Option<f32>,
}

/// Boundary contract for the generative model provider.
///
/// One operation: send a prompt (plus optional schema) and get raw text back.
/// No retries, no caching, no streaming. A call aborted by the host runtime
/// surfaces as an error, never as a silent success.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn send(&self, request: ModelRequest<'_>) -> Result<String, ModelError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini generateContent wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Joins the text parts of the first candidate. Gemini returns a single
/// candidate unless asked otherwise.
fn extract_text(reply: GenerateContentResponse) -> String {
    reply
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Production client
// ────────────────────────────────────────────────────────────────────────────

/// The Gemini-backed model client used by all services in NativeFluency.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_base_url(GEMINI_API_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn send(&self, request: ModelRequest<'_>) -> Result<String, ModelError> {
        let generation_config =
            if request.response_schema.is_some() || request.temperature.is_some() {
                Some(GenerationConfig {
                    temperature: request.temperature,
                    response_mime_type: request
                        .response_schema
                        .as_ref()
                        .map(|_| "application/json"),
                    response_schema: request.response_schema.clone(),
                })
            } else {
                None
            };

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            system_instruction: request.system_instruction.map(|text| Content {
                parts: vec![Part { text }],
            }),
            generation_config,
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", request.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's own message when the body parses
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            return Err(match status.as_u16() {
                401 | 403 => ModelError::Auth(message),
                429 => ModelError::RateLimited(message),
                _ => ModelError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let reply: GenerateContentResponse = response.json().await?;
        let text = extract_text(reply);

        debug!("model reply received ({} chars)", text.len());

        Ok(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Test double
// ────────────────────────────────────────────────────────────────────────────
