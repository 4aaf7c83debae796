use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-usable reason attached to a fallback result when the model could not be asked.
pub const MISSING_CREDENTIALS_CODE: &str = "missing_credentials";
pub const TRANSPORT_ERROR_CODE: &str = "transport_error";

pub const DEFAULT_ADVICE: &str =
    "Keep building and keep learning. Start with the missing skills at the top of the list.";
pub const DEFAULT_DAY: &str = "??";
pub const DEFAULT_TOPIC: &str = "Topic";

/// One resume / job description pair, as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// One chunk of the learning plan. `day` is display text such as "1-3".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub day: String,
    pub topic: String,
    pub activity: String,
}

/// The validated, caller-facing analysis record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: u8, // 0 – 100
    pub missing_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub roadmap: Vec<RoadmapItem>,
    pub advice: String,
    /// Set only when the model could not be asked at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Coarse failure class, for logging and for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingCredentials,
    Transport,
    MalformedResponse,
}

/// Every way the analysis pipeline can fail to produce a trustworthy result.
#[derive(Debug, Error)]
pub enum AnalysisFailure {
    #[error("completion service credentials are not configured")]
    MissingCredentials,

    #[error("completion call failed: {0}")]
    Transport(String),

    #[error("model response is not a JSON object: {0}")]
    MalformedResponse(String),
}

impl AnalysisFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            AnalysisFailure::MissingCredentials => FailureKind::MissingCredentials,
            AnalysisFailure::Transport(_) => FailureKind::Transport,
            AnalysisFailure::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }

    /// Malformed responses are a soft failure: the request went through, so no code is set.
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            AnalysisFailure::MissingCredentials => Some(MISSING_CREDENTIALS_CODE),
            AnalysisFailure::Transport(_) => Some(TRANSPORT_ERROR_CODE),
            AnalysisFailure::MalformedResponse(_) => None,
        }
    }

    fn advice(&self) -> String {
        match self {
            AnalysisFailure::MissingCredentials => {
                "Missing API credentials. Set ANTHROPIC_API_KEY in the environment or .env and retry."
                    .to_string()
            }
            AnalysisFailure::Transport(reason) => {
                format!("Could not reach the analysis service. Error: {reason}")
            }
            AnalysisFailure::MalformedResponse(_) => {
                "The analysis service returned a response that could not be read. Please try again."
                    .to_string()
            }
        }
    }

    /// The zeroed record returned in place of an analysis.
    pub fn into_fallback(self) -> AnalysisResult {
        AnalysisResult {
            match_score: 0,
            missing_skills: vec![],
            matching_skills: vec![],
            roadmap: vec![],
            advice: self.advice(),
            error: self.error_code().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_fallback_sets_error() {
        let result = AnalysisFailure::MissingCredentials.into_fallback();
        assert_eq!(result.error.as_deref(), Some(MISSING_CREDENTIALS_CODE));
        assert_eq!(result.match_score, 0);
        assert!(result.missing_skills.is_empty());
        assert!(result.matching_skills.is_empty());
        assert!(result.roadmap.is_empty());
        assert!(result.advice.contains("credentials"));
    }

    #[test]
    fn test_transport_fallback_sets_error_and_mentions_reason() {
        let result = AnalysisFailure::Transport("connection refused".to_string()).into_fallback();
        assert_eq!(result.error.as_deref(), Some(TRANSPORT_ERROR_CODE));
        assert!(result.advice.contains("connection refused"));
    }

    #[test]
    fn test_malformed_fallback_leaves_error_unset() {
        let result =
            AnalysisFailure::MalformedResponse("expected value".to_string()).into_fallback();
        assert!(result.error.is_none());
        assert!(!result.advice.is_empty());
    }

    #[test]
    fn test_fallback_advice_differs_per_kind() {
        let a = AnalysisFailure::MissingCredentials.into_fallback().advice;
        let b = AnalysisFailure::Transport("x".to_string()).into_fallback().advice;
        let c = AnalysisFailure::MalformedResponse("x".to_string()).into_fallback().advice;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_error_field_omitted_from_json_when_unset() {
        let result = AnalysisFailure::MalformedResponse("x".to_string()).into_fallback();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["match_score"], 0);
    }

    #[test]
    fn test_failure_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FailureKind::MalformedResponse).unwrap();
        assert_eq!(json, r#""malformed_response""#);
    }
}
