//! JSON extraction for external model output
//!
//! Language models tend to wrap their JSON answer in prose or code fences, so
//! the payload is located by its outermost braces before deserializing.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Mood classification reported by an upstream model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalAnalysis {
    #[serde(alias = "detected_mood", alias = "detectedMood")]
    pub mood: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default, alias = "summary")]
    pub analysis: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

fn truncate_raw(raw: &str) -> String {
    match raw.char_indices().nth(200) {
        Some((idx, _)) => format!("{}...", &raw[..idx]),
        None => raw.to_string(),
    }
}

/// Slice out the outermost `{...}` of a response
pub fn extract_json_object(response: &str) -> Option<&str> {
    let response = response.trim();
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (start < end).then(|| &response[start..=end])
}

/// Parse an external mood analysis from free-form model output
pub fn parse_external_analysis(response: &str) -> Result<ExternalAnalysis> {
    let json_str = extract_json_object(response).ok_or_else(|| {
        Error::InvalidData(format!(
            "No JSON found in external analysis | Raw: {}",
            truncate_raw(response.trim())
        ))
    })?;

    serde_json::from_str(json_str).map_err(|e| {
        Error::InvalidData(format!(
            "Invalid external analysis JSON: {} | Raw: {}",
            e,
            truncate_raw(json_str)
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_surrounding_text() {
        let response = r#"Here is my assessment:
```json
{"mood": "Anxious", "confidence": 0.82, "emotions": ["worried"], "analysis": "Sounds tense."}
```
Let me know if you need more."#;

        let parsed = parse_external_analysis(response).unwrap();
        assert_eq!(parsed.mood, "Anxious");
        assert_eq!(parsed.confidence, Some(0.82));
        assert_eq!(parsed.emotions, vec!["worried"]);
        assert_eq!(parsed.analysis.as_deref(), Some("Sounds tense."));
        assert!(parsed.recommendations.is_empty());
    }

    #[test]
    fn test_parse_accepts_detected_mood_alias() {
        let parsed = parse_external_analysis(r#"{"detectedMood": "sad"}"#).unwrap();
        assert_eq!(parsed.mood, "sad");
        assert_eq!(parsed.confidence, None);
    }

    #[test]
    fn test_no_json() {
        let err = parse_external_analysis("I could not decide.").unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains("No JSON found"));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_external_analysis("{mood: happy}").unwrap_err();
        assert!(err.to_string().contains("Invalid external analysis JSON"));
    }

    #[test]
    fn test_missing_mood_is_invalid() {
        assert!(parse_external_analysis(r#"{"confidence": 70}"#).is_err());
    }
}
