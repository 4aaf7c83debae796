//! Response Normalizer — turns raw model text into a validated `AnalysisResult`.
//!
//! Flow: strip fences → decode as a JSON object → validate and default each field.
//! A decode failure resolves to the malformed-response fallback; a badly typed field
//! only resets that field.

use serde_json::{Map, Value};
use tracing::warn;

use crate::analysis::models::{
    AnalysisFailure, AnalysisResult, RoadmapItem, DEFAULT_ADVICE, DEFAULT_DAY, DEFAULT_TOPIC,
};

const OPENING_FENCES: &[&str] = &["```json", "```"];
const CLOSING_FENCE: &str = "```";
const MAX_MATCH_SCORE: u64 = 100;

/// Strips a leading ```` ```json ```` / ```` ``` ```` and a trailing ```` ``` ````.
/// Fences anywhere else in the text are left alone.
pub fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    for fence in OPENING_FENCES {
        if let Some(rest) = text.strip_prefix(fence) {
            text = rest;
            break;
        }
    }
    if let Some(rest) = text.strip_suffix(CLOSING_FENCE) {
        text = rest;
    }
    text.trim()
}

/// Never fails: every problem resolves to a well-formed result.
pub fn normalize_response(raw: &str) -> AnalysisResult {
    parse_response(raw).unwrap_or_else(|failure| {
        warn!(kind = ?failure.kind(), "Falling back: {failure}");
        failure.into_fallback()
    })
}

/// Decodes and validates, reporting a decode failure as `MalformedResponse`.
pub fn parse_response(raw: &str) -> Result<AnalysisResult, AnalysisFailure> {
    let cleaned = strip_fences(raw);
    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| AnalysisFailure::MalformedResponse(e.to_string()))?;
    match value {
        Value::Object(fields) => Ok(validate_fields(&fields)),
        other => Err(AnalysisFailure::MalformedResponse(format!(
            "top-level value is {}, expected an object",
            json_type_name(&other)
        ))),
    }
}

fn validate_fields(fields: &Map<String, Value>) -> AnalysisResult {
    AnalysisResult {
        match_score: validate_match_score(fields.get("match_score")),
        missing_skills: validate_string_list("missing_skills", fields.get("missing_skills")),
        matching_skills: validate_string_list("matching_skills", fields.get("matching_skills")),
        roadmap: validate_roadmap(fields.get("roadmap")),
        advice: match fields.get("advice") {
            Some(Value::String(advice)) => advice.clone(),
            other => {
                warn_if_present("advice", other);
                DEFAULT_ADVICE.to_string()
            }
        },
        error: None,
    }
}

/// Accepts whole numbers in 0..=100 (including `72.0`). Anything else becomes 0.
fn validate_match_score(value: Option<&Value>) -> u8 {
    let score = match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= MAX_MATCH_SCORE as f64)
                .map(|f| f as u64)
        }),
        _ => None,
    };
    match score.filter(|s| *s <= MAX_MATCH_SCORE) {
        Some(s) => s as u8,
        None => {
            warn_if_present("match_score", value);
            0
        }
    }
}

/// All-or-nothing: one non-string element empties the whole list.
fn validate_string_list(field: &str, value: Option<&Value>) -> Vec<String> {
    let items = value.and_then(Value::as_array).and_then(|items| {
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
    });
    items.unwrap_or_else(|| {
        warn_if_present(field, value);
        Vec::new()
    })
}

/// Requires an array of objects; each item is then defaulted field by field.
fn validate_roadmap(value: Option<&Value>) -> Vec<RoadmapItem> {
    let items = value.and_then(Value::as_array).and_then(|items| {
        items
            .iter()
            .map(|item| item.as_object().map(roadmap_item))
            .collect::<Option<Vec<_>>>()
    });
    items.unwrap_or_else(|| {
        warn_if_present("roadmap", value);
        Vec::new()
    })
}

fn roadmap_item(fields: &Map<String, Value>) -> RoadmapItem {
    // day is display text; a bare number like 3 is kept as "3"
    let day = match fields.get("day") {
        Some(Value::String(day)) => day.clone(),
        Some(Value::Number(n)) => n.to_string(),
        other => {
            warn_if_present("roadmap.day", other);
            DEFAULT_DAY.to_string()
        }
    };
    RoadmapItem {
        day,
        topic: string_or("roadmap.topic", fields.get("topic"), DEFAULT_TOPIC),
        activity: string_or("roadmap.activity", fields.get("activity"), ""),
    }
}

fn string_or(field: &str, value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        other => {
            warn_if_present(field, other);
            default.to_string()
        }
    }
}

fn warn_if_present(field: &str, value: Option<&Value>) {
    if let Some(value) = value {
        warn!(
            field = field,
            "Model returned unusable {} for field, using default",
            json_type_name(value)
        );
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
