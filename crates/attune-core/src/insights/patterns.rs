//! Pattern detectors
//!
//! Each detector returns at most one pattern. All four run on every history
//! and the non-empty results are collected in detector order.

use chrono::{Datelike, Weekday};
use tracing::debug;

use crate::models::CheckInRecord;

use super::stats::{energy_levels, mean, round1};
use super::types::{Pattern, PatternKind};

/// A weekday is "low" when it trails the cross-day average by more than this
const LOW_DAY_MARGIN: f64 = 1.0;
/// Score change between consecutive check-ins that counts as a swing
const SWING_SIZE: i32 = 3;
/// Share of swings above which mood is called volatile
const SWING_RATIO: f64 = 0.3;
/// Scores at or below this are low for run detection
const LOW_SCORE: u8 = 4;
/// Consecutive low entries needed for a sustained-low run
const LOW_RUN_LENGTH: usize = 3;
/// Mean energy below this is consistently low
const LOW_ENERGY: f64 = 4.0;
/// Mood and energy within this many points are aligned
const ALIGNMENT_GAP: i32 = 2;
/// Share of aligned entries above which mood tracks energy
const ALIGNMENT_RATIO: f64 = 0.7;
/// Minimum entries a trigger needs before it is considered
const TRIGGER_MIN_OCCURRENCES: usize = 2;
/// Average delta a trigger must exceed to be reported
const TRIGGER_MIN_DELTA: f64 = 1.0;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Run every detector and keep the ones that fired
pub fn detect_patterns(history: &[CheckInRecord]) -> Vec<Pattern> {
    let patterns: Vec<Pattern> = [
        temporal_pattern(history),
        mood_pattern(history),
        energy_pattern(history),
        trigger_pattern(history),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!(
        count = patterns.len(),
        kinds = ?patterns.iter().map(|p| p.kind.as_str()).collect::<Vec<_>>(),
        "Pattern detection complete"
    );

    patterns
}

/// Weekdays whose average mood trails the cross-day average
///
/// Bucketing uses the calendar date, so input order does not matter here.
pub fn temporal_pattern(history: &[CheckInRecord]) -> Option<Pattern> {
    let mut buckets: [Vec<f64>; 7] = Default::default();
    for record in history {
        let index = record.date.weekday().num_days_from_monday() as usize;
        buckets[index].push(record.mood_score as f64);
    }

    let day_averages: Vec<(Weekday, f64)> = WEEKDAYS
        .iter()
        .zip(buckets.iter())
        .filter(|(_, scores)| !scores.is_empty())
        .map(|(day, scores)| (*day, mean(scores)))
        .collect();

    let averages: Vec<f64> = day_averages.iter().map(|(_, avg)| *avg).collect();
    let overall = mean(&averages);

    let low_days: Vec<&str> = day_averages
        .iter()
        .filter(|(_, avg)| overall - avg > LOW_DAY_MARGIN)
        .map(|(day, _)| weekday_name(*day))
        .collect();

    if low_days.is_empty() {
        return None;
    }

    let days = low_days.join(", ");
    Some(Pattern {
        kind: PatternKind::Temporal,
        description: format!("Your mood tends to be lower on {}", days),
        frequency: round1(low_days.len() as f64 / 7.0 * 100.0),
        confidence: 75,
        recommendation: format!(
            "Plan something restorative or lighten your load on {}",
            days
        ),
    })
}

/// Mood volatility, falling back to sustained lows
///
/// Only one mood pattern is returned: when both conditions hold, volatility
/// wins.
pub fn mood_pattern(history: &[CheckInRecord]) -> Option<Pattern> {
    swing_pattern(history).or_else(|| low_run_pattern(history))
}

fn swing_pattern(history: &[CheckInRecord]) -> Option<Pattern> {
    if history.len() < 2 {
        return None;
    }

    let pairs = history.len() - 1;
    let swings = history
        .windows(2)
        .filter(|w| (w[1].mood_score as i32 - w[0].mood_score as i32).abs() >= SWING_SIZE)
        .count();
    let ratio = swings as f64 / pairs as f64;

    if ratio <= SWING_RATIO {
        return None;
    }

    Some(Pattern {
        kind: PatternKind::Mood,
        description: format!(
            "Frequent mood fluctuations: {:.0}% of consecutive check-ins changed by {} or more points",
            ratio * 100.0,
            SWING_SIZE
        ),
        frequency: round1(ratio * 100.0),
        confidence: 80,
        recommendation: "Note your sleep, meals and activities around big mood shifts to learn what drives them".to_string(),
    })
}

fn low_run_pattern(history: &[CheckInRecord]) -> Option<Pattern> {
    let mut runs = 0;
    let mut entries_in_runs = 0;
    let mut current = 0;

    // Trailing sentinel closes a run that reaches the end of the history
    for low in history
        .iter()
        .map(|r| r.mood_score <= LOW_SCORE)
        .chain(std::iter::once(false))
    {
        if low {
            current += 1;
            continue;
        }
        if current >= LOW_RUN_LENGTH {
            runs += 1;
            entries_in_runs += current;
        }
        current = 0;
    }

    if runs == 0 {
        return None;
    }

    Some(Pattern {
        kind: PatternKind::Mood,
        description: format!(
            "Extended low mood periods: {} stretch{} of {} or more low check-ins in a row",
            runs,
            if runs == 1 { "" } else { "es" },
            LOW_RUN_LENGTH
        ),
        frequency: round1(entries_in_runs as f64 / history.len() as f64 * 100.0),
        confidence: 85,
        recommendation: "When low moods last several days, reach out to someone you trust or a mental health professional".to_string(),
    })
}

/// Persistently low energy, or else mood that moves with energy
pub fn energy_pattern(history: &[CheckInRecord]) -> Option<Pattern> {
    if history.is_empty() {
        return None;
    }

    let average_energy = mean(&energy_levels(history));
    if average_energy < LOW_ENERGY {
        return Some(Pattern {
            kind: PatternKind::Energy,
            description: format!(
                "Consistently low energy levels (average {:.1}/10)",
                average_energy
            ),
            frequency: 100.0,
            confidence: 90,
            recommendation: "Review your sleep, nutrition and daily movement to rebuild energy"
                .to_string(),
        });
    }

    let aligned = history
        .iter()
        .filter(|r| (r.energy_level as i32 - r.mood_score as i32).abs() <= ALIGNMENT_GAP)
        .count();
    let ratio = aligned as f64 / history.len() as f64;

    if ratio > ALIGNMENT_RATIO {
        return Some(Pattern {
            kind: PatternKind::Energy,
            description: "Your mood closely tracks your energy levels".to_string(),
            frequency: round1(ratio * 100.0),
            confidence: 85,
            recommendation:
                "Protect your energy with regular rest and movement to support your mood"
                    .to_string(),
        });
    }

    None
}

/// Trigger whose appearances most consistently move mood
///
/// The effect of a trigger is approximated by the change in score from the
/// previous entry, averaged over every entry carrying it.
pub fn trigger_pattern(history: &[CheckInRecord]) -> Option<Pattern> {
    // (trigger, occurrences, summed delta) in first-seen order
    let mut stats: Vec<(String, usize, f64)> = Vec::new();

    for (i, record) in history.iter().enumerate() {
        let delta = if i > 0 {
            record.mood_score as f64 - history[i - 1].mood_score as f64
        } else {
            0.0
        };

        for trigger in distinct_triggers(record) {
            match stats.iter_mut().find(|(name, _, _)| *name == trigger) {
                Some((_, count, sum)) => {
                    *count += 1;
                    *sum += delta;
                }
                None => stats.push((trigger, 1, delta)),
            }
        }
    }

    let mut best: Option<(String, usize, f64)> = None;
    for (trigger, count, sum) in stats {
        if count < TRIGGER_MIN_OCCURRENCES {
            continue;
        }
        let average = sum / count as f64;
        if average.abs() <= TRIGGER_MIN_DELTA {
            continue;
        }
        if best.as_ref().map_or(true, |(_, _, top)| average.abs() > top.abs()) {
            best = Some((trigger, count, average));
        }
    }

    let (trigger, count, average) = best?;
    let lowers = average < 0.0;

    Some(Pattern {
        kind: PatternKind::Trigger,
        description: format!(
            "'{}' is associated with mood {} of about {:.1} points",
            trigger,
            if lowers { "drops" } else { "lifts" },
            average.abs()
        ),
        frequency: round1(count as f64 / history.len() as f64 * 100.0),
        confidence: 80,
        recommendation: if lowers {
            format!("Plan coping strategies for situations involving {}", trigger)
        } else {
            format!("Make more room for {} in your routine", trigger)
        },
    })
}

/// Lowercased triggers of one entry, duplicates removed
pub(crate) fn distinct_triggers(record: &CheckInRecord) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for trigger in &record.triggers {
        let name = trigger.trim().to_lowercase();
        if !name.is_empty() && !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodLabel;
    use chrono::NaiveDate;

    /// 2024-01-01 is a Monday
    fn entry(day: u32, score: u8, energy: u8, triggers: &[&str]) -> CheckInRecord {
        CheckInRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            mood: MoodLabel::Happy,
            mood_score: score,
            energy_level: energy,
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            emotions: vec![],
        }
    }

    fn scores(values: &[u8]) -> Vec<CheckInRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, s)| entry(i as u32 + 1, *s, 6, &[]))
            .collect()
    }

    #[test]
    fn test_temporal_flags_low_days() {
        let history = scores(&[8, 2, 9, 1]);
        let pattern = temporal_pattern(&history).unwrap();
        assert_eq!(pattern.kind, PatternKind::Temporal);
        assert_eq!(
            pattern.description,
            "Your mood tends to be lower on Tuesday, Thursday"
        );
        assert_eq!(pattern.frequency, 28.6);
        assert_eq!(pattern.confidence, 75);
    }

    #[test]
    fn test_temporal_is_order_independent() {
        let mut history = scores(&[8, 2, 9, 1]);
        history.reverse();
        let pattern = temporal_pattern(&history).unwrap();
        assert!(pattern.description.ends_with("Tuesday, Thursday"));
    }

    #[test]
    fn test_temporal_needs_margin_over_one_point() {
        // overall 6, Tuesday exactly 1.0 below
        let history = scores(&[7, 5, 6]);
        assert!(temporal_pattern(&history).is_none());
    }

    #[test]
    fn test_swing_pattern_full_frequency() {
        let history = scores(&[8, 2, 9, 1]);
        let pattern = mood_pattern(&history).unwrap();
        assert_eq!(pattern.kind, PatternKind::Mood);
        assert_eq!(pattern.frequency, 100.0);
        assert_eq!(pattern.confidence, 80);
        assert!(pattern.description.starts_with("Frequent mood fluctuations"));
    }

    #[test]
    fn test_swing_ratio_must_exceed_thirty_percent() {
        // 1 swing in 4 pairs = 25%
        let history = scores(&[5, 5, 8, 8, 8]);
        assert!(swing_pattern(&history).is_none());
    }

    #[test]
    fn test_low_run_detected() {
        let history = scores(&[6, 4, 3, 4, 6, 6]);
        let pattern = mood_pattern(&history).unwrap();
        assert_eq!(pattern.confidence, 85);
        assert_eq!(pattern.frequency, 50.0);
        assert!(pattern.description.contains("1 stretch of 3"));
    }

    #[test]
    fn test_low_run_at_end_of_history() {
        let history = scores(&[7, 7, 7, 7, 7, 7, 7, 3, 3, 3]);
        let pattern = low_run_pattern(&history).unwrap();
        assert_eq!(pattern.frequency, 30.0);
    }

    #[test]
    fn test_swing_takes_precedence_over_low_run() {
        // swings everywhere and a run of lows at the end
        let history = scores(&[9, 1, 9, 4, 1, 4]);
        assert!(low_run_pattern(&history).is_some());
        let pattern = mood_pattern(&history).unwrap();
        assert_eq!(pattern.confidence, 80);
    }

    #[test]
    fn test_low_energy_pattern() {
        let history = vec![entry(1, 6, 2, &[]), entry(2, 7, 3, &[]), entry(3, 5, 4, &[])];
        let pattern = energy_pattern(&history).unwrap();
        assert_eq!(pattern.confidence, 90);
        assert_eq!(pattern.frequency, 100.0);
        assert!(pattern.description.contains("3.0/10"));
    }

    #[test]
    fn test_mood_tracks_energy() {
        let history = vec![
            entry(1, 6, 6, &[]),
            entry(2, 7, 8, &[]),
            entry(3, 4, 5, &[]),
            entry(4, 8, 7, &[]),
        ];
        let pattern = energy_pattern(&history).unwrap();
        assert_eq!(pattern.confidence, 85);
        assert_eq!(pattern.frequency, 100.0);
    }

    #[test]
    fn test_no_energy_pattern() {
        let history = vec![entry(1, 2, 9, &[]), entry(2, 9, 4, &[])];
        assert!(energy_pattern(&history).is_none());
    }

    #[test]
    fn test_trigger_pattern_picks_largest_effect() {
        let history = vec![
            entry(1, 8, 6, &[]),
            entry(2, 4, 6, &["work"]),
            entry(3, 8, 6, &["exercise"]),
            entry(4, 4, 6, &["Work"]),
            entry(5, 6, 6, &["exercise"]),
        ];
        // work: (-4 + -4) / 2 = -4.0, exercise: (4 + 2) / 2 = 3.0
        let pattern = trigger_pattern(&history).unwrap();
        assert_eq!(
            pattern.description,
            "'work' is associated with mood drops of about 4.0 points"
        );
        assert_eq!(pattern.frequency, 40.0);
        assert!(pattern.recommendation.contains("coping strategies"));
    }

    #[test]
    fn test_trigger_pattern_requires_two_occurrences_and_delta() {
        let history = vec![
            entry(1, 5, 6, &["family"]),
            entry(2, 6, 6, &["family"]),
            entry(3, 2, 6, &["money"]),
        ];
        // family averages 0.5, money only once
        assert!(trigger_pattern(&history).is_none());
    }

    #[test]
    fn test_detect_patterns_order() {
        let history = scores(&[8, 2, 9, 1]);
        let kinds: Vec<PatternKind> = detect_patterns(&history).iter().map(|p| p.kind).collect();
        assert_eq!(kinds[0], PatternKind::Temporal);
        assert_eq!(kinds[1], PatternKind::Mood);
    }
}
