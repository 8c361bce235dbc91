// All LLM prompt constants for the generation module.

use serde_json::{json, Value};

/// Persona substituted when the caller leaves the persona blank.
pub const DEFAULT_PERSONA: &str = "Average Native Speaker";

/// Sampling temperature for variation generation. Slightly creative.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

/// System instruction template. Replace `{language}`, `{platform}` and
/// `{persona}` before sending.
///
/// The "exactly 3" wording is a request to the model, not a contract the
/// parser relies on; the reply schema allows any array length.
pub const GENERATION_SYSTEM_TEMPLATE: &str = r#"You are a world-class linguist and social media expert specializing in {language}.
Your task is to rewrite the user's input text to sound like a specific persona on a specific platform.

Target Language: {language}
Target Platform: {platform}
Target Persona: {persona}

Rules:
1. If the input is not in {language}, translate it first, then adapt it.
2. Adopt the nuance, slang, sentence structure, and tone of the requested persona on the given platform.
3. Provide exactly 3 distinct variations (e.g., one standard/safe, one very stylistic/slang-heavy, one mixed).
4. Ensure the output fits the typical length constraints or style of the platform (e.g., hashtags for Instagram/RedNote)."#;

/// Structured-output schema the model must satisfy: an array of
/// `{tone, content}` objects, both required strings. Delegating shape
/// enforcement to the provider removes free-text parsing ambiguity.
pub fn variation_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "tone": {
                    "type": "STRING",
                    "description": "A short label for the tone of this variation (e.g. 'Formal', 'Gen Z Slang', 'Poetic')."
                },
                "content": {
                    "type": "STRING",
                    "description": "The rewritten content in the target language."
                }
            },
            "required": ["tone", "content"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_tone_and_content() {
        let schema = variation_schema();
        assert_eq!(schema["type"], "ARRAY");
        let required = schema["items"]["required"].as_array().unwrap();
        assert!(required.contains(&json!("tone")));
        assert!(required.contains(&json!("content")));
    }

    #[test]
    fn test_template_carries_all_placeholders() {
        for placeholder in ["{language}", "{platform}", "{persona}"] {
            assert!(
                GENERATION_SYSTEM_TEMPLATE.contains(placeholder),
                "template must carry {placeholder}"
            );
        }
    }
}
