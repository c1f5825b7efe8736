//! Summary statistics over a check-in history

use crate::models::{CheckInRecord, MoodLabel};

use super::types::{InsightSummary, Trend};

/// Half-to-half change in mean mood needed to call a trend
const TREND_THRESHOLD: f64 = 0.5;

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance around the mean
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// `100 - variance * 10`, clamped to 0..=100
pub fn mood_stability(scores: &[f64]) -> u8 {
    let stability = 100.0 - population_variance(scores) * 10.0;
    stability.clamp(0.0, 100.0).round() as u8
}

/// Compare the mean of the second half of `scores` against the first half
///
/// The split is by index, so callers must supply chronological order.
pub fn trend(scores: &[f64]) -> Trend {
    if scores.len() < 2 {
        return Trend::Stable;
    }
    let (first, second) = scores.split_at(scores.len() / 2);
    let delta = mean(second) - mean(first);
    if delta > TREND_THRESHOLD {
        Trend::Improving
    } else if delta < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Mode of the mood labels; ties go to the mood seen first
pub fn most_common_mood(history: &[CheckInRecord]) -> Option<MoodLabel> {
    let mut counts: Vec<(MoodLabel, usize)> = Vec::new();
    for record in history {
        match counts.iter_mut().find(|(mood, _)| *mood == record.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.mood, 1)),
        }
    }

    let mut best: Option<(MoodLabel, usize)> = None;
    for (mood, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

pub fn mood_scores(history: &[CheckInRecord]) -> Vec<f64> {
    history.iter().map(|r| r.mood_score as f64).collect()
}

pub fn energy_levels(history: &[CheckInRecord]) -> Vec<f64> {
    history.iter().map(|r| r.energy_level as f64).collect()
}

/// Compute the report summary for a non-empty history
pub fn summarize(history: &[CheckInRecord]) -> InsightSummary {
    let scores = mood_scores(history);
    let energy = energy_levels(history);

    InsightSummary {
        average_mood: round1(mean(&scores)),
        average_energy: round1(mean(&energy)),
        most_common_mood: most_common_mood(history),
        mood_stability: mood_stability(&scores),
        trend: trend(&scores),
        total_entries: history.len(),
    }
}
