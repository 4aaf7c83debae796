//! Prompt Builder — turns a resume / job description pair into the analysis prompts.

use crate::analysis::prompts::{
    ANALYSIS_SYSTEM_TEMPLATE, JOB_DESCRIPTION_HEADER, RESUME_HEADER,
};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Per-input character budget. Bounds request size, not text quality.
pub const MAX_INPUT_CHARS: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompts {
    pub system: String,
    pub user: String,
}

/// Prefix of `text` holding at most `max_chars` characters. May cut mid-word.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

pub fn build_prompts(resume_text: &str, job_description: &str) -> AnalysisPrompts {
    let system = ANALYSIS_SYSTEM_TEMPLATE.replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION);
    let user = format!(
        "{RESUME_HEADER}\n{}\n\n{JOB_DESCRIPTION_HEADER}\n{}",
        truncate_chars(resume_text, MAX_INPUT_CHARS),
        truncate_chars(job_description, MAX_INPUT_CHARS),
    );
    AnalysisPrompts { system, user }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_resume(user_prompt: &str) -> &str {
        let after = user_prompt
            .strip_prefix("RESUME:\n")
            .expect("prompt starts with resume header");
        let end = after
            .find("\n\nJOB DESCRIPTION:\n")
            .expect("prompt contains job description header");
        &after[..end]
    }

    #[test]
    fn test_short_inputs_pass_through_unmodified() {
        let prompts = build_prompts("Rust, Tokio, Postgres", "Backend engineer, Rust");
        assert_eq!(embedded_resume(&prompts.user), "Rust, Tokio, Postgres");
        assert!(prompts.user.ends_with("Backend engineer, Rust"));
    }

    #[test]
    fn test_long_resume_truncated_to_exactly_budget() {
        let resume = "a".repeat(MAX_INPUT_CHARS + 500);
        let prompts = build_prompts(&resume, "jd");
        assert_eq!(embedded_resume(&prompts.user).chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_long_job_description_truncated() {
        let jd = "b".repeat(MAX_INPUT_CHARS * 2);
        let prompts = build_prompts("resume", &jd);
        let embedded = prompts.user.rsplit("JOB DESCRIPTION:\n").next().unwrap();
        assert_eq!(embedded.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        let cut = truncate_chars(&text, 4);
        assert_eq!(cut, "éééé");
        assert_eq!(cut.len(), 8);
    }

    #[test]
    fn test_input_of_exact_budget_is_unchanged() {
        let text = "x".repeat(MAX_INPUT_CHARS);
        assert_eq!(truncate_chars(&text, MAX_INPUT_CHARS), text);
    }

    #[test]
    fn test_system_prompt_is_fixed_and_demands_raw_json() {
        let a = build_prompts("one", "two");
        let b = build_prompts("three", "four");
        assert_eq!(a.system, b.system);
        assert!(a.system.contains("Career Mentor"));
        assert!(a.system.contains("15-day"));
        assert!(a.system.contains("\"1-3\""));
        assert!(a.system.contains("just the raw JSON string"));
        assert!(!a.system.contains("{json_only_instruction}"));
    }

    #[test]
    fn test_placeholder_text_in_inputs_is_not_expanded() {
        let prompts = build_prompts("{job_description}", "plain jd");
        assert_eq!(embedded_resume(&prompts.user), "{job_description}");
    }

    #[test]
    fn test_build_prompts_is_deterministic() {
        assert_eq!(build_prompts("r", "j"), build_prompts("r", "j"));
    }
}
