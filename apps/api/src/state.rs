use crate::analysis::analyzer::GapAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the completion client for the process lifetime.
    pub analyzer: GapAnalyzer,
}
