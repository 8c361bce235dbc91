// Variation generation: system instruction construction, structured output
// schema, reply parsing. All model calls go through llm_client — no direct
// Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
