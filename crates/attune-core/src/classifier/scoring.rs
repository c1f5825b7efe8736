//! Numeric heuristics for the classifier: mood selection, confidence, severity

use crate::models::{MoodHints, MoodLabel, Severity};

/// Confidence every classification starts from
pub const BASE_CONFIDENCE: u8 = 60;

/// Upper bound on any reported confidence
pub const MAX_CONFIDENCE: u8 = 95;

/// Pick the mood with the strictly greatest match count
///
/// `counts` must be in [`MoodLabel::ALL`] order; ties go to the earlier mood.
/// With no matches at all the result is `Tired`, the fallback baseline.
pub fn select_mood(counts: &[(MoodLabel, usize)]) -> (MoodLabel, usize) {
    let mut best = (MoodLabel::Tired, 0);
    for &(mood, count) in counts {
        if count > best.1 {
            best = (mood, count);
        }
    }
    best
}

/// Confidence from the winning match count and which hints were supplied
pub fn confidence(matches: usize, hints: &MoodHints) -> u8 {
    let mut score = BASE_CONFIDENCE as usize;
    score += (matches * 5).min(20);
    if hints.mood_score.is_some() {
        score += 10;
    }
    if hints.energy_level.is_some() {
        score += 5;
    }
    if hints.context.is_some() {
        score += 5;
    }
    score.min(MAX_CONFIDENCE as usize) as u8
}

/// Severity only escalates for distress moods with a self-rated score
pub fn severity(mood: MoodLabel, mood_score: Option<u8>) -> Severity {
    let Some(score) = mood_score else {
        return Severity::Moderate;
    };

    if !mood.is_distress() {
        return Severity::Low;
    }

    match score {
        0..=3 => Severity::High,
        4..=5 => Severity::Moderate,
        _ => Severity::Low,
    }
}
