//! Recommendation handler

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;

use super::analyze::check_hint;
use super::json_body;
use crate::AppError;
use attune_core::{recommend, MoodLabel, Preferences, WellnessPlan};

/// Request body for recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub mood: String,
    /// Defaults to 5
    pub mood_score: Option<u8>,
    /// Defaults to 5
    pub energy_level: Option<u8>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// POST /api/recommendations - Tiered wellness plan for a mood
pub async fn get_recommendations(
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<WellnessPlan>, AppError> {
    let body = json_body(payload)?;
    let mood: MoodLabel = body
        .mood
        .parse()
        .map_err(|e: String| AppError::bad_request(&e))?;
    check_hint("mood_score", body.mood_score)?;
    check_hint("energy_level", body.energy_level)?;

    let plan = recommend(
        mood,
        body.mood_score.unwrap_or(5),
        body.energy_level.unwrap_or(5),
        &body.triggers,
        &body.preferences,
    );

    Ok(Json(plan))
}
