//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::errors::AppError;
use crate::pdf::extract_text;
use crate::resources::{generate_resources, LearningResource};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Deserialize)]
pub struct ResourcesRequest {
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Runs the gap analysis on raw text inputs. Analysis failures come back as a
/// 200 with the fallback record; only empty inputs are rejected.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    validate_inputs(&request.resume_text, &request.job_description)?;
    Ok(Json(
        run_analysis(&state, &request.resume_text, &request.job_description).await,
    ))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `resume` (PDF file) and `job_description` (text).
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_pdf: Option<Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read resume: {e}")))?;
                resume_pdf = Some(data);
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read job_description: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let resume_pdf =
        resume_pdf.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;

    let resume_text = extract_text(&resume_pdf);
    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the resume PDF".to_string(),
        ));
    }
    validate_inputs(&resume_text, &job_description)?;

    Ok(Json(
        run_analysis(&state, &resume_text, &job_description).await,
    ))
}

/// POST /api/v1/resources
pub async fn handle_resources(
    Json(request): Json<ResourcesRequest>,
) -> Json<Vec<LearningResource>> {
    Json(generate_resources(&request.skills))
}

async fn run_analysis(state: &AppState, resume_text: &str, job_description: &str) -> AnalyzeResponse {
    let analysis = state.analyzer.analyze(resume_text, job_description).await;
    let resources = generate_resources(&analysis.missing_skills);
    AnalyzeResponse {
        analysis,
        resources,
    }
}

fn validate_inputs(resume_text: &str, job_description: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}
