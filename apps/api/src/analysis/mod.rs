// Career gap analysis: prompt building, the single completion call, and
// normalization of the model's reply into a validated AnalysisResult.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompt_builder;
pub mod prompts;
