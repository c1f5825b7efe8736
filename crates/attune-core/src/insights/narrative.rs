//! Report text assembly
//!
//! Recommendations are actionable lines chosen in a fixed priority order.
//! Insights are narrative sentences describing the history. Both are pure
//! string building over values already computed by the other modules.

use crate::models::CheckInRecord;

use super::types::{Impact, InsightSummary, Pattern, Trend, TriggerImpact};

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MAX_INSIGHTS: usize = 6;

const STABLE_THRESHOLD: u8 = 70;
const VOLATILE_THRESHOLD: u8 = 50;
const LOW_AVERAGE_ENERGY: f64 = 5.0;

pub const START_TRACKING_RECOMMENDATION: &str =
    "Start tracking your mood daily to unlock personalized insights";
pub const START_TRACKING_INSIGHT: &str =
    "Log a few check-ins to see patterns and trends in your mood";

/// Build the prioritized recommendation list
pub fn recommendations(
    summary: &InsightSummary,
    patterns: &[Pattern],
    triggers: &[TriggerImpact],
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    match summary.trend {
        Trend::Declining => {
            lines.push(
                "Your mood has been declining. Consider talking to a mental health professional or someone you trust"
                    .to_string(),
            );
            lines.push(
                "Prioritize self-care this week: rest, regular meals and time for activities you enjoy"
                    .to_string(),
            );
        }
        Trend::Improving => lines.push(
            "Your mood is improving. Keep up the habits that have been helping".to_string(),
        ),
        Trend::Stable => {}
    }

    if summary.mood_stability < VOLATILE_THRESHOLD {
        lines.push(
            "Build a consistent daily routine with regular sleep and meal times to steady your mood"
                .to_string(),
        );
    }

    if summary.average_energy < LOW_AVERAGE_ENERGY {
        lines.push(
            "Your energy has been low. Focus on quality sleep, hydration and balanced nutrition"
                .to_string(),
        );
    }

    for pattern in patterns {
        if lines.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        lines.push(pattern.recommendation.clone());
    }

    let negative: Vec<&str> = triggers
        .iter()
        .filter(|t| t.impact == Impact::Negative)
        .map(|t| t.trigger.as_str())
        .collect();
    if !negative.is_empty() && lines.len() < MAX_RECOMMENDATIONS {
        lines.push(format!(
            "Develop coping strategies for your most challenging triggers: {}",
            negative.join(", ")
        ));
    }

    lines.truncate(MAX_RECOMMENDATIONS);
    lines
}

/// Build the narrative insight list
pub fn insights(
    summary: &InsightSummary,
    patterns: &[Pattern],
    triggers: &[TriggerImpact],
    history: &[CheckInRecord],
) -> Vec<String> {
    let mut lines = vec![format!(
        "Your average mood is {:.1}/10 and your average energy is {:.1}/10 across {} check-ins",
        summary.average_mood, summary.average_energy, summary.total_entries
    )];

    if let Some(mood) = summary.most_common_mood {
        lines.push(format!("Your most common mood is {}", mood));
    }

    if summary.mood_stability >= STABLE_THRESHOLD {
        lines.push(format!(
            "Your mood has been relatively stable (stability {}/100)",
            summary.mood_stability
        ));
    } else if summary.mood_stability < VOLATILE_THRESHOLD {
        lines.push(format!(
            "Your mood has been quite variable (stability {}/100)",
            summary.mood_stability
        ));
    }

    if let Some(pattern) = patterns.first() {
        lines.push(pattern.description.clone());
    }

    if let Some(top) = triggers.first() {
        lines.push(format!(
            "'{}' is your most frequent trigger, appearing in {:.1}% of check-ins",
            top.trigger, top.frequency
        ));
    }

    // First entry wins on ties
    let mut best: Option<&CheckInRecord> = None;
    for record in history {
        if best.map_or(true, |b| record.mood_score > b.mood_score) {
            best = Some(record);
        }
    }
    if let Some(record) = best {
        lines.push(format!(
            "Your best day was {} with a mood score of {}/10",
            record.date.format("%A, %B %-d, %Y"),
            record.mood_score
        ));
    }

    lines.truncate(MAX_INSIGHTS);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::PatternKind;
    use crate::models::MoodLabel;
    use chrono::NaiveDate;

    fn summary(trend: Trend, stability: u8, energy: f64) -> InsightSummary {
        InsightSummary {
            average_mood: 6.0,
            average_energy: energy,
            most_common_mood: Some(MoodLabel::Happy),
            mood_stability: stability,
            trend,
            total_entries: 4,
        }
    }

    fn pattern(recommendation: &str) -> Pattern {
        Pattern {
            kind: PatternKind::Mood,
            description: format!("about {}", recommendation),
            frequency: 50.0,
            confidence: 80,
            recommendation: recommendation.to_string(),
        }
    }

    fn negative(name: &str) -> TriggerImpact {
        TriggerImpact {
            trigger: name.to_string(),
            occurrences: 2,
            frequency: 50.0,
            average_mood: 3.0,
            impact: Impact::Negative,
        }
    }

    #[test]
    fn test_declining_lines_come_first() {
        let lines = recommendations(&summary(Trend::Declining, 80, 6.0), &[], &[]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("mental health professional"));
        assert!(lines[1].starts_with("Prioritize self-care"));
    }

    #[test]
    fn test_priority_order_and_cap() {
        let patterns = vec![pattern("p1"), pattern("p2"), pattern("p3")];
        let lines = recommendations(
            &summary(Trend::Improving, 40, 3.0),
            &patterns,
            &[negative("work")],
        );
        assert_eq!(lines.len(), MAX_RECOMMENDATIONS);
        assert!(lines[0].starts_with("Your mood is improving"));
        assert!(lines[1].starts_with("Build a consistent daily routine"));
        assert!(lines[2].starts_with("Your energy has been low"));
        assert_eq!(lines[3], "p1");
        assert_eq!(lines[4], "p2");
    }

    #[test]
    fn test_negative_triggers_named_together() {
        let lines = recommendations(
            &summary(Trend::Stable, 80, 6.0),
            &[],
            &[negative("work"), negative("money")],
        );
        assert_eq!(
            lines,
            vec!["Develop coping strategies for your most challenging triggers: work, money"]
        );
    }

    #[test]
    fn test_insights_sentences() {
        let history = vec![
            CheckInRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                mood: MoodLabel::Happy,
                mood_score: 8,
                energy_level: 6,
                triggers: vec![],
                emotions: vec![],
            },
            CheckInRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                mood: MoodLabel::Happy,
                mood_score: 8,
                energy_level: 6,
                triggers: vec![],
                emotions: vec![],
            },
        ];
        let lines = insights(
            &summary(Trend::Stable, 90, 6.0),
            &[pattern("p1")],
            &[negative("work")],
            &history,
        );
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("6.0/10"));
        assert_eq!(lines[1], "Your most common mood is happy");
        assert!(lines[2].contains("relatively stable"));
        assert_eq!(lines[3], "about p1");
        assert!(lines[4].contains("50.0%"));
        assert_eq!(
            lines[5],
            "Your best day was Monday, January 1, 2024 with a mood score of 8/10"
        );
    }

    #[test]
    fn test_mid_stability_has_no_sentence() {
        let lines = insights(&summary(Trend::Stable, 60, 6.0), &[], &[], &[]);
        assert_eq!(lines.len(), 2);
    }
}
