//! Insights handler

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use super::json_body;
use crate::{AppError, AppState};
use attune_core::import::validate_scores;
use attune_core::{analyze, sort_chronologically, CheckInRecord, InsightsReport, Timeframe};

/// Request body for history analysis
#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub history: Vec<CheckInRecord>,
    /// week, month, quarter, year or all
    pub timeframe: Option<String>,
}

/// POST /api/insights - Analyze a check-in history
///
/// History is sorted by date before analysis, so callers may send it in any
/// order.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<InsightsReport>, AppError> {
    let body = json_body(payload)?;
    let max_entries = state.config.limits.max_history_entries;
    if body.history.len() > max_entries {
        return Err(AppError::bad_request(&format!(
            "history exceeds {} entries",
            max_entries
        )));
    }

    let timeframe: Timeframe = match body.timeframe.as_deref() {
        Some(t) => t.parse().map_err(|e: String| AppError::bad_request(&e))?,
        None => state.config.default_timeframe,
    };

    validate_scores(&body.history).map_err(|e| AppError::bad_request(&e.to_string()))?;

    let mut history = body.history;
    sort_chronologically(&mut history);

    debug!(entries = history.len(), timeframe = timeframe.as_str(), "Analyzing history");

    Ok(Json(analyze(&history, timeframe)))
}
