// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt fragment that enforces raw JSON output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
You MUST respond with valid JSON only. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown formatting (like ```json) in the response, just the raw JSON string. \
Do NOT include explanations or apologies.";
