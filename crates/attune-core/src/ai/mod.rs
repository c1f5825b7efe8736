//! Blending of upstream model output with the local classifier
//!
//! An upstream language model may produce its own mood reading. It only
//! replaces local fields when it is well formed; otherwise the local analysis
//! stands. Severity and triggers always come from the local classifier.

pub mod parsing;

use tracing::{debug, warn};

use crate::classifier::scoring::MAX_CONFIDENCE;
use crate::classifier::text::MAX_RECOMMENDATIONS;
use crate::classifier::MAX_EMOTIONS;
use crate::error::{Error, Result};
use crate::models::{normalize_mood_label, MoodAnalysis, MoodLabel};

pub use parsing::{extract_json_object, parse_external_analysis, ExternalAnalysis};

/// Confidence as a percentage, accepting 0..=1 fractions
fn normalize_confidence(raw: f64) -> Option<u8> {
    if !raw.is_finite() || raw < 0.0 {
        return None;
    }
    let percent = if raw <= 1.0 { raw * 100.0 } else { raw };
    if percent > 100.0 {
        return None;
    }
    Some(percent.round() as u8)
}

/// An external analysis that passed validation
struct Accepted {
    mood: MoodLabel,
    confidence: Option<u8>,
}

fn validate(external: &ExternalAnalysis) -> Result<Accepted> {
    let mood = normalize_mood_label(&external.mood).ok_or_else(|| {
        Error::InvalidData(format!("Unknown mood from external analysis: {}", external.mood))
    })?;

    let confidence = match external.confidence {
        Some(raw) => Some(normalize_confidence(raw).ok_or_else(|| {
            Error::InvalidData(format!("Confidence out of range: {}", raw))
        })?),
        None => None,
    };

    Ok(Accepted { mood, confidence })
}

/// Overlay an external model response on a local analysis
///
/// Returns a new value; `local` is left untouched.
pub fn blend_analysis(local: &MoodAnalysis, response: &str) -> MoodAnalysis {
    let external = match parse_external_analysis(response) {
        Ok(external) => external,
        Err(e) => {
            warn!("Discarding external analysis: {}", e);
            return local.clone();
        }
    };

    let accepted = match validate(&external) {
        Ok(accepted) => accepted,
        Err(e) => {
            warn!("Discarding external analysis: {}", e);
            return local.clone();
        }
    };

    let mut blended = local.clone();
    blended.detected_mood = accepted.mood;
    if let Some(confidence) = accepted.confidence {
        blended.confidence = confidence.min(MAX_CONFIDENCE);
    }

    let emotions: Vec<String> = external
        .emotions
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .fold(Vec::new(), |mut acc, e| {
            if !acc.contains(&e) {
                acc.push(e);
            }
            acc
        });
    if !emotions.is_empty() {
        blended.emotions = emotions.into_iter().take(MAX_EMOTIONS).collect();
    }

    if let Some(analysis) = external.analysis.filter(|a| !a.trim().is_empty()) {
        blended.analysis = analysis;
    }

    let recommendations: Vec<String> = external
        .recommendations
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .take(MAX_RECOMMENDATIONS)
        .collect();
    if !recommendations.is_empty() {
        blended.recommendations = recommendations;
    }

    debug!(
        local = local.detected_mood.as_str(),
        blended = blended.detected_mood.as_str(),
        confidence = blended.confidence,
        "Blended external analysis"
    );

    blended
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::models::{MoodHints, Severity};

    fn local() -> MoodAnalysis {
        let hints = MoodHints {
            mood_score: Some(2),
            ..Default::default()
        };
        classify("I feel so anxious and worried about work", &hints)
    }

    #[test]
    fn test_well_formed_external_overrides() {
        let local = local();
        let response = r#"{"mood": "stress", "confidence": 0.99, "emotions": ["Tense", "tense", "tired"],
            "analysis": "You sound under pressure.", "recommendations": ["Take a break"]}"#;
        let blended = blend_analysis(&local, response);

        assert_eq!(blended.detected_mood, MoodLabel::Stressed);
        assert_eq!(blended.confidence, MAX_CONFIDENCE);
        assert_eq!(blended.emotions, vec!["tense", "tired"]);
        assert_eq!(blended.analysis, "You sound under pressure.");
        assert_eq!(blended.recommendations, vec!["Take a break"]);
        // Engine keeps severity and triggers
        assert_eq!(blended.severity, local.severity);
        assert_eq!(blended.severity, Severity::High);
        assert_eq!(blended.triggers, local.triggers);
    }

    #[test]
    fn test_percentage_confidence() {
        let blended = blend_analysis(&local(), r#"{"mood": "sad", "confidence": 72}"#);
        assert_eq!(blended.detected_mood, MoodLabel::Sad);
        assert_eq!(blended.confidence, 72);
    }

    #[test]
    fn test_empty_fields_keep_local_values() {
        let local = local();
        let blended = blend_analysis(&local, r#"{"mood": "happy", "emotions": [], "analysis": " "}"#);
        assert_eq!(blended.detected_mood, MoodLabel::Happy);
        assert_eq!(blended.confidence, local.confidence);
        assert_eq!(blended.emotions, local.emotions);
        assert_eq!(blended.analysis, local.analysis);
        assert_eq!(blended.recommendations, local.recommendations);
    }

    #[test]
    fn test_fallback_on_unknown_mood() {
        let local = local();
        assert_eq!(blend_analysis(&local, r#"{"mood": "melancholic-ish"}"#), local);
    }

    #[test]
    fn test_fallback_on_bad_confidence() {
        let local = local();
        assert_eq!(blend_analysis(&local, r#"{"mood": "sad", "confidence": 140}"#), local);
        assert_eq!(blend_analysis(&local, r#"{"mood": "sad", "confidence": -0.2}"#), local);
    }

    #[test]
    fn test_fallback_on_garbage() {
        let local = local();
        assert_eq!(blend_analysis(&local, "not json at all"), local);
    }

    #[test]
    fn test_normalize_confidence() {
        assert_eq!(normalize_confidence(0.5), Some(50));
        assert_eq!(normalize_confidence(1.0), Some(100));
        assert_eq!(normalize_confidence(100.0), Some(100));
        assert_eq!(normalize_confidence(100.5), None);
        assert_eq!(normalize_confidence(f64::NAN), None);
    }
}
