//! Mood Classifier
//!
//! Turns free text (typed, or a voice transcript) plus optional self-ratings
//! into a [`MoodAnalysis`]:
//!
//! 1. Count keyword occurrences per mood in the lowercased text
//! 2. Pick the mood with the most matches (`tired` when nothing matches)
//! 3. Collect matched keywords and hinted emotions (max 5)
//! 4. Detect life-domain triggers with regex patterns
//! 5. Score confidence and severity ([`scoring`])
//! 6. Build the summary and suggestions ([`text`])
//!
//! Never fails: unmatched or empty text falls through to the default path.

pub mod scoring;
pub mod text;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{MoodAnalysis, MoodHints, MoodLabel, Trigger};

/// Maximum emotions reported per classification
pub const MAX_EMOTIONS: usize = 5;

/// Keywords per mood, matched as literal substrings of the lowercased text
const MOOD_KEYWORDS: &[(MoodLabel, [&str; 8])] = &[
    (
        MoodLabel::Anxious,
        [
            "anxious",
            "worried",
            "nervous",
            "uneasy",
            "panic",
            "overwhelmed",
            "scared",
            "afraid",
        ],
    ),
    (
        MoodLabel::Happy,
        [
            "happy", "joy", "glad", "grateful", "content", "cheerful", "wonderful", "great",
        ],
    ),
    (
        MoodLabel::Sad,
        [
            "sad",
            "down",
            "depressed",
            "lonely",
            "hopeless",
            "cry",
            "upset",
            "miserable",
        ],
    ),
    (
        MoodLabel::Tired,
        [
            "tired",
            "exhausted",
            "drained",
            "sleepy",
            "fatigued",
            "weary",
            "worn out",
            "burned out",
        ],
    ),
    (
        MoodLabel::Stressed,
        [
            "stressed",
            "pressure",
            "tense",
            "frustrated",
            "deadline",
            "overloaded",
            "hectic",
            "irritated",
        ],
    ),
    (
        MoodLabel::Excited,
        [
            "excited",
            "thrilled",
            "energized",
            "pumped",
            "eager",
            "motivated",
            "enthusiastic",
            "inspired",
        ],
    ),
];

/// Trigger patterns, checked in order against the original text
static TRIGGER_PATTERNS: Lazy<Vec<(Trigger, Regex)>> = Lazy::new(|| {
    [
        (
            Trigger::Work,
            r"(?i)\b(work|job|boss|office|meeting|deadline|project|career|colleague|coworker)s?\b",
        ),
        (
            Trigger::Family,
            r"(?i)\b(family|mom|dad|mother|father|parents?|sister|brother|kids?|children|son|daughter)\b",
        ),
        (
            Trigger::Relationships,
            r"(?i)\b(partner|boyfriend|girlfriend|husband|wife|relationship|dating|breakup|divorce)\b",
        ),
        (
            Trigger::Finances,
            r"(?i)\b(money|bills?|rent|debt|finances?|financial|salary|budget|loan)\b",
        ),
        (
            Trigger::Health,
            r"(?i)\b(sick|ill|illness|pain|doctor|health|headache|injury|hospital)\b",
        ),
        (
            Trigger::Sleep,
            r"(?i)\b(sleep|slept|sleeping|insomnia|nightmares?|awake|bedtime)\b",
        ),
        (
            Trigger::Social,
            r"(?i)\b(friends?|party|social|people|alone|isolated)\b",
        ),
    ]
    .into_iter()
    .map(|(trigger, pattern)| (trigger, Regex::new(pattern).expect("valid regex")))
    .collect()
});

/// Occurrence count per mood, in [`MoodLabel::ALL`] order
pub fn keyword_counts(lowered: &str) -> Vec<(MoodLabel, usize)> {
    MOOD_KEYWORDS
        .iter()
        .map(|(mood, keywords)| {
            let count = keywords.iter().map(|kw| lowered.matches(kw).count()).sum();
            (*mood, count)
        })
        .collect()
}

/// Every keyword present in the text, mood order then keyword order
fn matched_keywords<'a>(lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    MOOD_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().map(|kw| -> &'a str { *kw }))
        .filter(move |kw| lowered.contains(kw))
}

/// Trigger categories mentioned in the text, each at most once
pub fn detect_triggers(text: &str) -> Vec<Trigger> {
    TRIGGER_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(trigger, _)| *trigger)
        .collect()
}

/// Deduplicated, lowercased, first-seen order, capped
fn collect_emotions<'a>(candidates: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut emotions: Vec<String> = Vec::new();
    for candidate in candidates {
        let emotion = candidate.trim().to_lowercase();
        if emotion.is_empty() || emotions.contains(&emotion) {
            continue;
        }
        emotions.push(emotion);
        if emotions.len() == MAX_EMOTIONS {
            break;
        }
    }
    emotions
}

/// Classify check-in text into a mood analysis
pub fn classify(text: &str, hints: &MoodHints) -> MoodAnalysis {
    let lowered = text.to_lowercase();

    let counts = keyword_counts(&lowered);
    let (mood, matches) = scoring::select_mood(&counts);

    let emotions = collect_emotions(
        matched_keywords(&lowered).chain(hints.emotions.iter().map(String::as_str)),
    );
    let triggers = detect_triggers(text);

    let confidence = scoring::confidence(matches, hints);
    let severity = scoring::severity(mood, hints.mood_score);

    debug!(
        mood = mood.as_str(),
        matches,
        confidence,
        severity = severity.as_str(),
        triggers = triggers.len(),
        "Classified check-in"
    );

    MoodAnalysis {
        detected_mood: mood,
        confidence,
        analysis: text::summary(mood, &emotions, &triggers, hints),
        recommendations: text::recommendations(mood, severity, &triggers),
        emotions,
        triggers,
        severity,
    }
}
