//! Gap analysis pipeline.
//!
//! Flow: credential check → build prompts → one completion call → normalize.
//! No retries and no state carried between calls.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::models::{AnalysisFailure, AnalysisResult};
use crate::analysis::normalizer::{normalize_response, parse_response};
use crate::analysis::prompt_builder::build_prompts;
use crate::config::Config;
use crate::llm_client::{CompletionClient, CompletionRequest};

/// Sampling parameters for the analysis call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

impl From<&Config> for AnalysisSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_tokens: config.llm_max_tokens,
            temperature: config.llm_temperature,
        }
    }
}

/// Holds the completion collaborator for the lifetime of the service. Never mutated.
#[derive(Clone)]
pub struct GapAnalyzer {
    client: Arc<dyn CompletionClient>,
    settings: AnalysisSettings,
}

impl GapAnalyzer {
    pub fn new(client: Arc<dyn CompletionClient>, settings: AnalysisSettings) -> Self {
        Self { client, settings }
    }

    /// Always returns a well-formed result; failures become the fallback record.
    pub async fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisResult {
        match self.request_completion(resume_text, job_description).await {
            Ok(raw) => {
                let result = normalize_response(&raw);
                log_outcome(&result);
                result
            }
            Err(failure) => {
                warn!(kind = ?failure.kind(), "Gap analysis fell back: {failure}");
                failure.into_fallback()
            }
        }
    }

    /// Same pipeline, with the failure class kept as a typed error.
    pub async fn try_analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AnalysisFailure> {
        let raw = self
            .request_completion(resume_text, job_description)
            .await?;
        let result = parse_response(&raw)?;
        log_outcome(&result);
        Ok(result)
    }

    /// Credential check, prompt building and the single completion call.
    async fn request_completion(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<String, AnalysisFailure> {
        if !self.client.has_credentials() {
            return Err(AnalysisFailure::MissingCredentials);
        }

        info!(
            "Starting gap analysis (resume: {} chars, job description: {} chars)",
            resume_text.chars().count(),
            job_description.chars().count()
        );

        let prompts = build_prompts(resume_text, job_description);
        let request = CompletionRequest {
            system: prompts.system,
            prompt: prompts.user,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        self.client
            .complete(&request)
            .await
            .map_err(|e| AnalysisFailure::Transport(e.to_string()))
    }
}

fn log_outcome(result: &AnalysisResult) {
    info!(
        "Gap analysis complete: score={}, missing={}, matching={}, roadmap={}",
        result.match_score,
        result.missing_skills.len(),
        result.matching_skills.len(),
        result.roadmap.len()
    );
}
