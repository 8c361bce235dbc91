// Prompt constants for the explanation module.

/// Cap on how much of the original input travels with an explanation
/// request. Truncation, not failure; no marker is appended.
pub const ORIGINAL_INPUT_CAP: usize = 1000;

/// Explanation prompt template. Replace `{selection}`, `{context}`,
/// `{target_language}`, `{original_input}` and `{output_language}` before
/// sending.
///
/// The under-50-words cap is requested of the model, not enforced locally.
pub const EXPLAIN_PROMPT_TEMPLATE: &str = r#"The user has highlighted the following phrase: "{selection}".

Full Context Sentence/Post (Target Language: {target_language}): "{context}"

User's Original Input: "{original_input}"

Task: Explain the meaning of the highlighted phrase "{selection}".
CRITICAL: The explanation MUST be written in {output_language}.

- If it is slang, explain the connotation.
- If it is a cultural reference, explain the origin briefly.
- If it is standard language, explain the definition.
- Keep the explanation concise (under 50 words)."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_all_placeholders() {
        for placeholder in [
            "{selection}",
            "{context}",
            "{target_language}",
            "{original_input}",
            "{output_language}",
        ] {
            assert!(
                EXPLAIN_PROMPT_TEMPLATE.contains(placeholder),
                "template must carry {placeholder}"
            );
        }
    }
}
