//! Core types for the Insights Engine

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::MoodLabel;

/// Direction of mood between the first and second half of the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which detector produced a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Day-of-week effects
    Temporal,
    /// Swings or sustained lows in mood score
    Mood,
    /// Energy level behaviour
    Energy,
    /// A trigger that moves mood
    Trigger,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Temporal => "temporal",
            PatternKind::Mood => "mood",
            PatternKind::Energy => "energy",
            PatternKind::Trigger => "trigger",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a trigger relates to mood on the days it appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
            Impact::Neutral => "neutral",
        }
    }
}

/// A detected behavioural pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub description: String,
    /// Percentage, one decimal
    pub frequency: f64,
    pub confidence: u8,
    pub recommendation: String,
}

/// Aggregate statistics over the analysed history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    pub average_mood: f64,
    pub average_energy: f64,
    /// None only for an empty history
    pub most_common_mood: Option<MoodLabel>,
    /// 0-100, higher is steadier
    pub mood_stability: u8,
    pub trend: Trend,
    pub total_entries: usize,
}

/// Ranking entry for one trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerImpact {
    pub trigger: String,
    pub occurrences: usize,
    /// Percentage of entries containing the trigger, one decimal
    pub frequency: f64,
    /// Mean mood score on entries containing the trigger, one decimal
    pub average_mood: f64,
    pub impact: Impact,
}

/// Full output of the insights engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub summary: InsightSummary,
    pub patterns: Vec<Pattern>,
    pub triggers: Vec<TriggerImpact>,
    pub recommendations: Vec<String>,
    pub insights: Vec<String>,
}
