//! Selection explanation — one free-text model round trip anchored to a
//! highlighted phrase. No output schema; explanations are prose.

use serde::Deserialize;

use crate::errors::ServiceError;
use crate::explanation::prompts::{EXPLAIN_PROMPT_TEMPLATE, ORIGINAL_INPUT_CAP};
use crate::llm_client::{ModelClient, ModelRequest, GEMINI_MODEL};
use crate::models::language::{SystemLanguage, TargetLanguage};

/// Request body for phrase explanation.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainRequest {
    /// The highlighted phrase.
    pub selection: String,
    /// The full sentence or post the phrase was highlighted in, verbatim.
    pub context: String,
    /// Language the context is written in.
    pub target_language: TargetLanguage,
    /// The user's original input, for reference. Only the first
    /// `ORIGINAL_INPUT_CAP` characters are transmitted.
    #[serde(default)]
    pub original_input: String,
    /// Language the explanation must be written in, regardless of the
    /// language of the content itself.
    pub explanation_language: SystemLanguage,
    pub api_key: String,
}

/// Runs one explanation round trip and returns the model's prose verbatim.
///
/// An empty reply is a transport failure, not an empty success; the HTTP
/// layer turns transport failures into the localized fallback sentence.
pub async fn explain(
    client: &dyn ModelClient,
    request: &ExplainRequest,
) -> Result<String, ServiceError> {
    if request.api_key.trim().is_empty() {
        return Err(ServiceError::Config("missing API key".to_string()));
    }
    if request.selection.trim().is_empty() {
        return Err(ServiceError::Config(
            "selection cannot be empty".to_string(),
        ));
    }

    let prompt = build_explain_prompt(request);

    let reply = client
        .send(ModelRequest {
            api_key: request.api_key.trim(),
            model: GEMINI_MODEL,
            system_instruction: None,
            prompt: &prompt,
            response_schema: None,
            temperature: None,
        })
        .await?;

    if reply.trim().is_empty() {
        return Err(ServiceError::Transport(
            "model returned an empty explanation".to_string(),
        ));
    }

    Ok(reply)
}

/// Fills the explanation prompt. The original input is capped at
/// `ORIGINAL_INPUT_CAP` characters with no truncation marker.
pub(crate) fn build_explain_prompt(request: &ExplainRequest) -> String {
    let original_input: String = request
        .original_input
        .chars()
        .take(ORIGINAL_INPUT_CAP)
        .collect();

    EXPLAIN_PROMPT_TEMPLATE
        .replace("{selection}", &request.selection)
        .replace("{context}", &request.context)
        .replace("{target_language}", request.target_language.label())
        .replace("{original_input}", &original_input)
        .replace("{output_language}", request.explanation_language.label())
}

/// Fixed, localized sentence shown when an explanation fails. A failed
/// explanation never invalidates generation results already on screen.
pub fn fallback_message(language: SystemLanguage) -> &'static str {
    match language {
        SystemLanguage::English => {
            "Error generating explanation. Please check your connection or API key."
        }
        SystemLanguage::Chinese => "生成解释时出错。请检查您的网络连接或 API 密钥。",
        SystemLanguage::Spanish => {
            "Error al generar la explicación. Comprueba tu conexión o tu clave API."
        }
        SystemLanguage::Japanese => {
            "解説の生成中にエラーが発生しました。接続または API キーを確認してください。"
        }
        SystemLanguage::Korean => {
            "설명을 생성하는 중 오류가 발생했습니다. 연결 또는 API 키를 확인하세요."
        }
        SystemLanguage::French => {
            "Erreur lors de la génération de l'explication. Vérifiez votre connexion ou votre clé API."
        }
        SystemLanguage::German => {
            "Fehler beim Generieren der Erklärung. Überprüfen Sie Ihre Verbindung oder Ihren API-Schlüssel."
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::llm_client::mock::MockModelClient;

    fn request(api_key: &str, selection: &str, original_input: &str) -> ExplainRequest {
        ExplainRequest {
            selection: selection.to_string(),
            context: "好累啊家人们".to_string(),
            target_language: TargetLanguage::Chinese,
            original_input: original_input.to_string(),
            explanation_language: SystemLanguage::English,
            api_key: api_key.to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_api_key_fails_before_any_network_call() {
        let client = MockModelClient::text("an explanation");

        let err = explain(&client, &request("  ", "家人们", "I'm so tired"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Config(_)));
        assert_eq!(client.call_count(), 0, "no network call may be attempted");
    }

    #[tokio::test]
    async fn test_blank_selection_fails_before_any_network_call() {
        let client = MockModelClient::text("an explanation");

        let err = explain(&client, &request("k1", "   ", "I'm so tired"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Config(_)));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_reply_text_is_returned_verbatim() {
        let client = MockModelClient::text("A warm term of address for followers.");

        let explanation = explain(&client, &request("k1", "家人们", "I'm so tired"))
            .await
            .unwrap();

        assert_eq!(explanation, "A warm term of address for followers.");
    }

    #[tokio::test]
    async fn test_empty_reply_is_a_transport_failure() {
        let client = MockModelClient::text("   ");

        let err = explain(&client, &request("k1", "家人们", "I'm so tired"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_as_transport() {
        let client = MockModelClient::rate_limited("quota exhausted");

        let err = explain(&client, &request("k1", "家人们", "I'm so tired"))
            .await
            .unwrap_err();

        match err {
            ServiceError::Transport(msg) => assert!(msg.contains("quota exhausted")),
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[test]
    fn test_original_input_is_capped_without_marker() {
        // 'z' appears nowhere in the template or the fixture strings, so it
        // only survives if the tail is transmitted.
        let long_input = "a".repeat(ORIGINAL_INPUT_CAP) + &"z".repeat(500);

        let prompt = build_explain_prompt(&request("k1", "家人们", &long_input));

        let expected = "a".repeat(ORIGINAL_INPUT_CAP);
        assert!(prompt.contains(&expected), "first 1000 chars travel verbatim");
        assert!(!prompt.contains('z'), "nothing past the cap is transmitted");
        assert!(!prompt.contains("..."), "no truncation marker");
    }

    #[test]
    fn test_short_original_input_travels_unchanged() {
        let prompt = build_explain_prompt(&request("k1", "家人们", "I'm so tired"));
        assert!(prompt.contains("I'm so tired"));
    }

    /// End-to-end scenario from the product brief: a Chinese slang selection
    /// explained in English.
    #[tokio::test]
    async fn test_chinese_selection_explained_in_english() {
        let client = MockModelClient::text("Literally 'family members'; slangy address.");

        explain(&client, &request("k1", "家人们", "I'm so tired"))
            .await
            .unwrap();

        let sent = client.sent().unwrap();
        assert!(sent.system_instruction.is_none(), "free text by design");
        assert!(sent.response_schema.is_none());
        assert!(sent.temperature.is_none());
        assert!(sent.prompt.contains(r#""家人们""#), "selection is quoted");
        assert!(sent.prompt.contains("好累啊家人们"), "context travels verbatim");
        assert!(
            sent.prompt.contains("MUST be written in English"),
            "output language is an explicit instruction"
        );
        assert!(sent.prompt.contains("Chinese (Mandarin)"));
    }

    #[test]
    fn test_fallback_messages_are_distinct_per_language() {
        let messages: HashSet<&str> = SystemLanguage::ALL.iter().map(|l| fallback_message(*l)).collect();
        assert_eq!(messages.len(), SystemLanguage::ALL.len());
        for language in SystemLanguage::ALL {
            assert!(!fallback_message(language).is_empty());
        }
    }
}
