//! Check-in classification handler

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::json_body;
use crate::{AppError, AppState};
use attune_core::{blend_analysis, classify, MoodAnalysis, MoodHints};

/// Request body for classifying a check-in
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    pub mood_score: Option<u8>,
    pub energy_level: Option<u8>,
    pub context: Option<String>,
    /// Upstream model output, either its raw text or a JSON object
    pub external: Option<Value>,
}

/// Reject hints outside 1..=10
pub(crate) fn check_hint(name: &str, value: Option<u8>) -> Result<(), AppError> {
    match value {
        Some(v) if !(1..=10).contains(&v) => Err(AppError::bad_request(&format!(
            "{} must be between 1 and 10",
            name
        ))),
        _ => Ok(()),
    }
}

/// POST /api/analyze - Classify check-in text
///
/// When `external` is present it is blended over the local result; a
/// malformed external analysis falls back to the local one.
pub async fn analyze_checkin(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<MoodAnalysis>, AppError> {
    let body = json_body(payload)?;
    if body.text.trim().is_empty() {
        return Err(AppError::bad_request("text must not be empty"));
    }
    let max_chars = state.config.limits.max_text_chars;
    if body.text.chars().count() > max_chars {
        return Err(AppError::bad_request(&format!(
            "text exceeds {} characters",
            max_chars
        )));
    }
    check_hint("mood_score", body.mood_score)?;
    check_hint("energy_level", body.energy_level)?;

    let hints = MoodHints {
        emotions: body.emotions,
        mood_score: body.mood_score,
        energy_level: body.energy_level,
        context: body.context,
    };

    let local = classify(&body.text, &hints);

    let analysis = match body.external {
        Some(Value::String(raw)) => blend_analysis(&local, &raw),
        Some(Value::Null) | None => local,
        Some(other) => blend_analysis(&local, &other.to_string()),
    };

    Ok(Json(analysis))
}
