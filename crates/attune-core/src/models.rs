//! Domain models for Attune

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The closed set of mood states the engine reasons about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Anxious,
    Happy,
    Sad,
    Tired,
    Stressed,
    Excited,
}

impl MoodLabel {
    /// All labels in classifier iteration order (earlier wins ties)
    pub const ALL: [MoodLabel; 6] = [
        Self::Anxious,
        Self::Happy,
        Self::Sad,
        Self::Tired,
        Self::Stressed,
        Self::Excited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anxious => "anxious",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Tired => "tired",
            Self::Stressed => "stressed",
            Self::Excited => "excited",
        }
    }

    /// Moods whose severity is escalated from a low mood score
    pub fn is_distress(&self) -> bool {
        matches!(self, Self::Anxious | Self::Sad | Self::Stressed)
    }
}

impl std::str::FromStr for MoodLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anxious" => Ok(Self::Anxious),
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "tired" => Ok(Self::Tired),
            "stressed" => Ok(Self::Stressed),
            "excited" => Ok(Self::Excited),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map an upstream mood string (canonical or alias) onto the closed label set
///
/// Returns None when the string names nothing the engine understands.
pub fn normalize_mood_label(raw: &str) -> Option<MoodLabel> {
    if let Ok(label) = raw.parse::<MoodLabel>() {
        return Some(label);
    }

    match raw.trim().to_lowercase().as_str() {
        "anxiety" | "worried" | "nervous" | "fearful" | "afraid" => Some(MoodLabel::Anxious),
        "joy" | "joyful" | "content" | "calm" | "grateful" | "cheerful" | "good" => {
            Some(MoodLabel::Happy)
        }
        "sadness" | "down" | "depressed" | "lonely" | "unhappy" => Some(MoodLabel::Sad),
        "exhausted" | "fatigued" | "sleepy" | "drained" | "neutral" => Some(MoodLabel::Tired),
        "stress" | "overwhelmed" | "frustrated" | "angry" | "irritated" => {
            Some(MoodLabel::Stressed)
        }
        "energized" | "thrilled" | "enthusiastic" | "eager" => Some(MoodLabel::Excited),
        _ => None,
    }
}

/// Life-domain trigger detected in check-in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Work,
    Family,
    Relationships,
    Finances,
    Health,
    Sleep,
    Social,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Family => "family",
            Self::Relationships => "relationships",
            Self::Finances => "finances",
            Self::Health => "health",
            Self::Sleep => "sleep",
            Self::Social => "social",
        }
    }
}

impl std::str::FromStr for Trigger {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "family" => Ok(Self::Family),
            "relationships" => Ok(Self::Relationships),
            "finances" => Ok(Self::Finances),
            "health" => Ok(Self::Health),
            "sleep" => Ok(Self::Sleep),
            "social" => Ok(Self::Social),
            _ => Err(format!("Unknown trigger: {}", s)),
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Escalation tier of a classified mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional signals supplied alongside check-in text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodHints {
    #[serde(default)]
    pub emotions: Vec<String>,
    /// Self-rated mood, 1-10
    pub mood_score: Option<u8>,
    /// Self-rated energy, 1-10
    pub energy_level: Option<u8>,
    pub context: Option<String>,
}

/// Result of classifying a check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    pub detected_mood: MoodLabel,
    /// 0-95
    pub confidence: u8,
    /// At most 5, lowercase, first-seen order
    pub emotions: Vec<String>,
    pub triggers: Vec<Trigger>,
    pub severity: Severity,
    pub analysis: String,
    /// At most 5
    pub recommendations: Vec<String>,
}

/// One historical check-in, already labeled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub date: NaiveDate,
    pub mood: MoodLabel,
    /// 1-10
    pub mood_score: u8,
    /// 1-10
    pub energy_level: u8,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub emotions: Vec<String>,
}

/// Category of a wellness action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Breathing,
    Meditation,
    Exercise,
    Social,
    Creative,
    Rest,
    Nutrition,
    Grounding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
        }
    }
}

/// A concrete wellness action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub benefits: Vec<String>,
    pub instructions: Vec<String>,
}

/// Tiered output of the recommendation generator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellnessPlan {
    /// At most 2
    pub immediate: Vec<WellnessRecommendation>,
    /// At most 3
    pub short_term: Vec<WellnessRecommendation>,
    /// At most 2
    pub long_term: Vec<WellnessRecommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    #[default]
    Moderate,
    High,
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Home,
    Work,
    Outdoors,
    #[default]
    Any,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "work" | "office" => Ok(Self::Work),
            "outdoors" | "outside" => Ok(Self::Outdoors),
            "any" => Ok(Self::Any),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

/// Situational preferences for recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub activity_level: Option<ActivityLevel>,
    pub time_available_minutes: Option<u32>,
    pub environment: Option<Environment>,
}

/// Window of history considered by the insights engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Week,
    Month,
    Quarter,
    Year,
    #[default]
    All,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    /// Window length in days, None for unbounded
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
            Self::Year => Some(365),
            Self::All => None,
        }
    }
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            _ => Err(format!("Unknown timeframe: {}", s)),
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_label_parse_is_case_insensitive() {
        assert_eq!("Anxious".parse::<MoodLabel>().unwrap(), MoodLabel::Anxious);
        assert_eq!(" EXCITED ".parse::<MoodLabel>().unwrap(), MoodLabel::Excited);
        assert!("calm".parse::<MoodLabel>().is_err());
    }

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(normalize_mood_label("anxiety"), Some(MoodLabel::Anxious));
        assert_eq!(normalize_mood_label("Joyful"), Some(MoodLabel::Happy));
        assert_eq!(normalize_mood_label("depressed"), Some(MoodLabel::Sad));
        assert_eq!(normalize_mood_label("neutral"), Some(MoodLabel::Tired));
        assert_eq!(normalize_mood_label("overwhelmed"), Some(MoodLabel::Stressed));
        assert_eq!(normalize_mood_label("thrilled"), Some(MoodLabel::Excited));
        assert_eq!(normalize_mood_label("sad"), Some(MoodLabel::Sad));
        assert_eq!(normalize_mood_label("bewildered"), None);
    }

    #[test]
    fn test_distress_moods() {
        let distress: Vec<_> = MoodLabel::ALL.iter().filter(|m| m.is_distress()).collect();
        assert_eq!(
            distress,
            vec![&MoodLabel::Anxious, &MoodLabel::Sad, &MoodLabel::Stressed]
        );
    }

    #[test]
    fn test_recommendation_serializes_type_field() {
        let rec = WellnessRecommendation {
            kind: RecommendationType::Breathing,
            title: "Box Breathing".into(),
            description: String::new(),
            duration_minutes: 4,
            difficulty: Difficulty::Easy,
            benefits: vec![],
            instructions: vec![],
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "breathing");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["duration_minutes"], 4);
    }

    #[test]
    fn test_check_in_record_defaults_lists() {
        let record: CheckInRecord = serde_json::from_str(
            r#"{"date": "2024-03-04", "mood": "sad", "mood_score": 3, "energy_level": 4}"#,
        )
        .unwrap();
        assert_eq!(record.mood, MoodLabel::Sad);
        assert!(record.triggers.is_empty());
        assert!(record.emotions.is_empty());
    }

    #[test]
    fn test_timeframe_days() {
        assert_eq!("Month".parse::<Timeframe>().unwrap().days(), Some(30));
        assert_eq!(Timeframe::default().days(), None);
        assert!("decade".parse::<Timeframe>().is_err());
    }
}
