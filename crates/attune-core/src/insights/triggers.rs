//! Trigger ranking

use crate::models::CheckInRecord;

use super::patterns::distinct_triggers;
use super::stats::round1;
use super::types::{Impact, TriggerImpact};

/// Maximum number of ranked triggers in a report
pub const MAX_RANKED_TRIGGERS: usize = 5;

/// Average mood at or above this marks a trigger as positive
const POSITIVE_MOOD: f64 = 7.0;
/// Average mood at or below this marks a trigger as negative
const NEGATIVE_MOOD: f64 = 4.0;

fn classify_impact(average_mood: f64) -> Impact {
    if average_mood >= POSITIVE_MOOD {
        Impact::Positive
    } else if average_mood <= NEGATIVE_MOOD {
        Impact::Negative
    } else {
        Impact::Neutral
    }
}

/// Rank triggers by how often they appear
///
/// Ties keep first-seen order.
pub fn rank_triggers(history: &[CheckInRecord]) -> Vec<TriggerImpact> {
    if history.is_empty() {
        return Vec::new();
    }

    // (trigger, occurrences, summed mood)
    let mut tally: Vec<(String, usize, f64)> = Vec::new();
    for record in history {
        for trigger in distinct_triggers(record) {
            match tally.iter_mut().find(|(name, _, _)| *name == trigger) {
                Some((_, count, sum)) => {
                    *count += 1;
                    *sum += record.mood_score as f64;
                }
                None => tally.push((trigger, 1, record.mood_score as f64)),
            }
        }
    }

    let total = history.len() as f64;
    let mut ranked: Vec<TriggerImpact> = tally
        .into_iter()
        .map(|(trigger, occurrences, sum)| {
            let average = sum / occurrences as f64;
            TriggerImpact {
                trigger,
                occurrences,
                frequency: round1(occurrences as f64 / total * 100.0),
                average_mood: round1(average),
                impact: classify_impact(average),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    ranked.truncate(MAX_RANKED_TRIGGERS);
    ranked
}
