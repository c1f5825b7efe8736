//! Summary and recommendation text for classifier output

use crate::models::{MoodHints, MoodLabel, Severity, Trigger};

/// Recommendations returned with a single classification
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Per-mood suggestions; the classifier takes the first three
const MOOD_SUGGESTIONS: &[(MoodLabel, &[&str])] = &[
    (
        MoodLabel::Anxious,
        &[
            "Try 4-7-8 breathing: inhale for 4 seconds, hold for 7, exhale for 8",
            "Ground yourself with the 5-4-3-2-1 technique",
            "Write down what is worrying you and one small step you can take",
            "Limit caffeine for the rest of the day",
        ],
    ),
    (
        MoodLabel::Sad,
        &[
            "Be gentle with yourself and acknowledge how you feel",
            "Reach out to a friend or family member you trust",
            "Spend a few minutes outside in natural light",
            "Listen to music that comforts you",
        ],
    ),
    (
        MoodLabel::Stressed,
        &[
            "Break your tasks into smaller, manageable steps",
            "Take a 10-minute walk to reset",
            "Practice progressive muscle relaxation",
            "Say no to one non-essential commitment today",
        ],
    ),
    (
        MoodLabel::Tired,
        &[
            "Take a short power nap of 15-20 minutes if you can",
            "Drink a glass of water and have a light snack",
            "Step outside for fresh air and gentle movement",
            "Plan an earlier bedtime tonight",
        ],
    ),
    (
        MoodLabel::Happy,
        &[
            "Write down three things you are grateful for today",
            "Share your good mood with someone you care about",
            "Notice what contributed to this feeling so you can repeat it",
        ],
    ),
    (
        MoodLabel::Excited,
        &[
            "Channel this energy into a project you care about",
            "Capture your ideas in a quick plan before they fade",
            "Take a few calm breaths to stay focused",
        ],
    ),
];

const CRISIS_LINES: [&str; 2] = [
    "If these feelings persist or intensify, consider reaching out to a mental health professional",
    "If you are in crisis, contact a local crisis line or emergency services right away",
];

/// Extra suggestions for specific triggers, in priority order
const TRIGGER_SUGGESTIONS: &[(Trigger, &str)] = &[
    (
        Trigger::Work,
        "Schedule short breaks between work tasks and set a clear stop time",
    ),
    (
        Trigger::Sleep,
        "Keep a consistent bedtime and avoid screens for an hour before sleep",
    ),
    (
        Trigger::Social,
        "Reach out to one person you trust, even with a short message",
    ),
];

/// The fixed suggestion list for a mood
pub fn mood_suggestions(mood: MoodLabel) -> &'static [&'static str] {
    MOOD_SUGGESTIONS
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, lines)| *lines)
        .unwrap_or(&[])
}

/// Human-readable summary, one clause per supplied signal
pub fn summary(
    mood: MoodLabel,
    emotions: &[String],
    triggers: &[Trigger],
    hints: &MoodHints,
) -> String {
    let mut text = format!(
        "Based on your check-in, you appear to be feeling {}.",
        mood.as_str()
    );

    if let Some(score) = hints.mood_score {
        text.push_str(&format!(" You rated your mood {}/10.", score));
    }

    if !emotions.is_empty() {
        let top: Vec<&str> = emotions.iter().take(3).map(String::as_str).collect();
        text.push_str(&format!(" Key emotions detected: {}.", top.join(", ")));
    }

    if !triggers.is_empty() {
        let names: Vec<&str> = triggers.iter().map(Trigger::as_str).collect();
        text.push_str(&format!(" Possible triggers: {}.", names.join(", ")));
    }

    if let Some(energy) = hints.energy_level {
        text.push_str(&format!(" Your energy level is {}/10.", energy));
    }

    text
}

/// Ordered suggestions: mood list, crisis lines, trigger extras; capped at five
pub fn recommendations(mood: MoodLabel, severity: Severity, triggers: &[Trigger]) -> Vec<String> {
    let mut lines: Vec<String> = mood_suggestions(mood)
        .iter()
        .take(3)
        .map(|s| s.to_string())
        .collect();

    if severity == Severity::High {
        lines.extend(CRISIS_LINES.iter().map(|s| s.to_string()));
    }

    for (trigger, line) in TRIGGER_SUGGESTIONS {
        if triggers.contains(trigger) {
            lines.push(line.to_string());
        }
    }

    lines.truncate(MAX_RECOMMENDATIONS);
    lines
}
