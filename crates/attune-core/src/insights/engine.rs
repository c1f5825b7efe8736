//! Insights Engine - builds a report from a check-in history

use tracing::{debug, info};

use crate::models::{CheckInRecord, Timeframe};

use super::narrative::{self, START_TRACKING_INSIGHT, START_TRACKING_RECOMMENDATION};
use super::patterns::detect_patterns;
use super::stats::summarize;
use super::triggers::rank_triggers;
use super::types::{InsightSummary, InsightsReport, Trend};

/// Analyze a chronologically ordered history
///
/// The timeframe window is anchored on the most recent entry rather than the
/// wall clock, so the same input always produces the same report.
pub fn analyze(history: &[CheckInRecord], timeframe: Timeframe) -> InsightsReport {
    let window = filter_timeframe(history, timeframe);

    if window.is_empty() {
        debug!("No check-ins in window, returning empty report");
        return empty_report();
    }

    let summary = summarize(&window);
    let patterns = detect_patterns(&window);
    let triggers = rank_triggers(&window);
    let recommendations = narrative::recommendations(&summary, &patterns, &triggers);
    let insights = narrative::insights(&summary, &patterns, &triggers, &window);

    info!(
        entries = window.len(),
        timeframe = timeframe.as_str(),
        trend = summary.trend.as_str(),
        patterns = patterns.len(),
        "Generated insights report"
    );

    InsightsReport {
        summary,
        patterns,
        triggers,
        recommendations,
        insights,
    }
}

/// The fixed report for a history with no entries
pub fn empty_report() -> InsightsReport {
    InsightsReport {
        summary: InsightSummary {
            average_mood: 0.0,
            average_energy: 0.0,
            most_common_mood: None,
            mood_stability: 0,
            trend: Trend::Stable,
            total_entries: 0,
        },
        patterns: Vec::new(),
        triggers: Vec::new(),
        recommendations: vec![START_TRACKING_RECOMMENDATION.to_string()],
        insights: vec![START_TRACKING_INSIGHT.to_string()],
    }
}

/// Keep entries less than `timeframe.days()` days older than the latest one
pub fn filter_timeframe(history: &[CheckInRecord], timeframe: Timeframe) -> Vec<CheckInRecord> {
    let (Some(days), Some(latest)) = (timeframe.days(), history.iter().map(|r| r.date).max())
    else {
        return history.to_vec();
    };

    history
        .iter()
        .filter(|r| (latest - r.date).num_days() < days)
        .cloned()
        .collect()
}
