//! Recommendation Generator
//!
//! Turns a mood state and situational preferences into three tiers of
//! wellness actions. Each tier has its own rule table keyed on mood; short and
//! long term rules are further gated by activity level, environment and time.
//! Selection is a pure function of the inputs.

pub mod catalog;

use tracing::debug;

use crate::models::{
    ActivityLevel, Environment, MoodLabel, Preferences, WellnessPlan, WellnessRecommendation,
};
use catalog::*;

pub const MAX_IMMEDIATE: usize = 2;
pub const MAX_SHORT_TERM: usize = 3;
pub const MAX_LONG_TERM: usize = 2;

/// Time assumed available when the caller does not say
pub const DEFAULT_TIME_AVAILABLE_MINUTES: u32 = 30;

/// Energy at or below this level forces low-effort activities
const LOW_ENERGY_LEVEL: u8 = 3;

/// Preferences with defaults filled in
#[derive(Debug, Clone, Copy)]
struct Situation {
    activity: ActivityLevel,
    environment: Environment,
    time_available: u32,
}

impl Situation {
    fn resolve(prefs: &Preferences, energy_level: u8) -> Self {
        let mut activity = prefs.activity_level.unwrap_or_default();
        if energy_level <= LOW_ENERGY_LEVEL {
            activity = ActivityLevel::Low;
        }
        Self {
            activity,
            environment: prefs.environment.unwrap_or_default(),
            time_available: prefs
                .time_available_minutes
                .unwrap_or(DEFAULT_TIME_AVAILABLE_MINUTES),
        }
    }
}

/// Build the tiered plan for a mood
pub fn recommend(
    mood: MoodLabel,
    mood_score: u8,
    energy_level: u8,
    triggers: &[String],
    prefs: &Preferences,
) -> WellnessPlan {
    let situation = Situation::resolve(prefs, energy_level);

    let plan = WellnessPlan {
        immediate: finish(immediate(mood), MAX_IMMEDIATE),
        short_term: finish(short_term(mood, triggers, situation), MAX_SHORT_TERM),
        long_term: finish(long_term(mood), MAX_LONG_TERM),
    };

    debug!(
        mood = mood.as_str(),
        mood_score,
        energy_level,
        immediate = plan.immediate.len(),
        short_term = plan.short_term.len(),
        long_term = plan.long_term.len(),
        "Built wellness plan"
    );

    plan
}

fn finish(activities: Vec<&'static Activity>, cap: usize) -> Vec<WellnessRecommendation> {
    activities.into_iter().take(cap).map(Activity::build).collect()
}

fn immediate(mood: MoodLabel) -> Vec<&'static Activity> {
    match mood {
        MoodLabel::Anxious => vec![&BOX_BREATHING, &GROUNDING_54321],
        MoodLabel::Stressed => vec![&PHYSIOLOGICAL_SIGH, &PROGRESSIVE_RELAXATION],
        MoodLabel::Sad => vec![&SELF_COMPASSION_BREAK, &COMFORT_MUSIC],
        MoodLabel::Tired => vec![&ENERGIZING_BREATH, &HYDRATE_AND_SNACK],
        MoodLabel::Happy => vec![&GRATITUDE_SNAPSHOT, &SAVOR_THE_MOMENT],
        MoodLabel::Excited => vec![&CENTERING_BREATH, &IDEA_CAPTURE],
    }
}

/// The movement option that fits the activity level and setting
fn movement(situation: Situation) -> &'static Activity {
    if situation.environment == Environment::Work {
        return &DESK_STRETCH;
    }
    match situation.activity {
        ActivityLevel::Low => &GENTLE_STRETCH,
        ActivityLevel::Moderate => &BRISK_WALK,
        ActivityLevel::High => &CARDIO_BURST,
    }
}

fn short_term(mood: MoodLabel, triggers: &[String], situation: Situation) -> Vec<&'static Activity> {
    let mut items: Vec<&'static Activity> = Vec::new();

    match mood {
        MoodLabel::Anxious => {
            if situation.activity == ActivityLevel::Low {
                items.push(&BODY_SCAN);
            } else if situation.environment == Environment::Work {
                items.push(&DESK_STRETCH);
            } else {
                items.push(&MINDFUL_WALK);
            }
            items.push(&WORRY_JOURNAL);
        }
        MoodLabel::Sad => {
            items.push(&EXPRESSIVE_JOURNALING);
            items.push(&REACH_OUT);
            if situation.activity != ActivityLevel::Low
                && situation.environment != Environment::Work
            {
                items.push(&GENTLE_WALK_OUTSIDE);
            }
        }
        MoodLabel::Tired => {
            if situation.time_available >= POWER_NAP.duration_minutes {
                items.push(&POWER_NAP);
            }
            items.push(&FRESH_AIR_BREAK);
            items.push(&BALANCED_SNACK);
        }
        MoodLabel::Stressed => {
            items.push(movement(situation));
            items.push(&BRAIN_DUMP);
            if situation.time_available >= BODY_SCAN.duration_minutes {
                items.push(&BODY_SCAN);
            }
        }
        MoodLabel::Happy => {
            items.push(&SHARE_GOOD_NEWS);
            items.push(&CREATIVE_SESSION);
            if situation.activity == ActivityLevel::High {
                items.push(&ACTIVE_PLAY);
            }
        }
        MoodLabel::Excited => {
            items.push(&PLAN_NEXT_STEP);
            items.push(movement(situation));
            items.push(&CALM_WIND_DOWN);
        }
    }

    // Social triggers earn a connection item when the mood table left room
    let social = triggers.iter().any(|t| t.eq_ignore_ascii_case("social"));
    if social && !items.iter().any(|a| a.title == REACH_OUT.title) {
        items.push(&REACH_OUT);
    }

    items
}

fn long_term(mood: MoodLabel) -> Vec<&'static Activity> {
    let mut items: Vec<&'static Activity> = vec![&MINDFULNESS_HABIT];
    match mood {
        MoodLabel::Anxious | MoodLabel::Stressed => items.push(&EXERCISE_HABIT),
        MoodLabel::Sad => items.push(&SUPPORT_NETWORK),
        _ => {}
    }
    items.push(&SLEEP_HYGIENE);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendationType;

    fn titles(items: &[WellnessRecommendation]) -> Vec<&str> {
        items.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_anxious_immediate_items() {
        let plan = recommend(MoodLabel::Anxious, 5, 5, &[], &Preferences::default());
        assert_eq!(
            titles(&plan.immediate),
            vec!["Box Breathing", "5-4-3-2-1 Grounding"]
        );
        assert_eq!(plan.immediate[0].kind, RecommendationType::Breathing);
        assert_eq!(plan.immediate[1].kind, RecommendationType::Grounding);
    }

    #[test]
    fn test_tier_caps_hold_for_every_mood() {
        let prefs = Preferences {
            activity_level: Some(ActivityLevel::High),
            time_available_minutes: Some(60),
            environment: Some(Environment::Outdoors),
        };
        let triggers = vec!["social".to_string()];
        for mood in MoodLabel::ALL {
            let plan = recommend(mood, 5, 8, &triggers, &prefs);
            assert!(plan.immediate.len() <= MAX_IMMEDIATE);
            assert!(!plan.short_term.is_empty() && plan.short_term.len() <= MAX_SHORT_TERM);
            assert_eq!(plan.long_term.len(), MAX_LONG_TERM);
            assert!(plan
                .short_term
                .iter()
                .chain(&plan.immediate)
                .chain(&plan.long_term)
                .all(|r| r.duration_minutes > 0));
        }
    }

    #[test]
    fn test_sad_short_term_journaling_and_connection() {
        let plan = recommend(MoodLabel::Sad, 4, 5, &[], &Preferences::default());
        assert_eq!(
            titles(&plan.short_term),
            vec![
                "Expressive Journaling",
                "Reach Out to Someone",
                "Gentle Walk Outside"
            ]
        );
    }

    #[test]
    fn test_power_nap_requires_twenty_minutes() {
        let short = Preferences {
            time_available_minutes: Some(15),
            ..Default::default()
        };
        let plan = recommend(MoodLabel::Tired, 5, 2, &[], &short);
        assert!(!titles(&plan.short_term).contains(&"Power Nap"));

        let enough = Preferences {
            time_available_minutes: Some(20),
            ..Default::default()
        };
        let plan = recommend(MoodLabel::Tired, 5, 2, &[], &enough);
        assert_eq!(plan.short_term[0].title, "Power Nap");
    }

    #[test]
    fn test_default_time_allows_power_nap() {
        let plan = recommend(MoodLabel::Tired, 5, 5, &[], &Preferences::default());
        assert_eq!(plan.short_term[0].title, "Power Nap");
    }

    #[test]
    fn test_stressed_movement_follows_activity_level() {
        let high = Preferences {
            activity_level: Some(ActivityLevel::High),
            ..Default::default()
        };
        let plan = recommend(MoodLabel::Stressed, 5, 7, &[], &high);
        assert_eq!(plan.short_term[0].title, "Cardio Burst");

        // Low energy overrides the stated preference
        let plan = recommend(MoodLabel::Stressed, 5, 2, &[], &high);
        assert_eq!(plan.short_term[0].title, "Gentle Stretching");
    }

    #[test]
    fn test_work_environment_uses_desk_stretch() {
        let prefs = Preferences {
            environment: Some(Environment::Work),
            ..Default::default()
        };
        let plan = recommend(MoodLabel::Anxious, 5, 6, &[], &prefs);
        assert_eq!(plan.short_term[0].title, "Desk Stretch Sequence");
    }

    #[test]
    fn test_long_term_mood_specific_items() {
        let plan = recommend(MoodLabel::Stressed, 5, 5, &[], &Preferences::default());
        assert_eq!(
            titles(&plan.long_term),
            vec!["Daily Mindfulness Practice", "Regular Exercise Routine"]
        );

        let plan = recommend(MoodLabel::Sad, 5, 5, &[], &Preferences::default());
        assert_eq!(
            titles(&plan.long_term),
            vec!["Daily Mindfulness Practice", "Build Your Support Network"]
        );

        let plan = recommend(MoodLabel::Happy, 5, 5, &[], &Preferences::default());
        assert_eq!(
            titles(&plan.long_term),
            vec!["Daily Mindfulness Practice", "Sleep Hygiene Routine"]
        );
    }

    #[test]
    fn test_social_trigger_adds_connection_when_room() {
        let triggers = vec!["Social".to_string()];
        let plan = recommend(MoodLabel::Anxious, 5, 5, &triggers, &Preferences::default());
        assert_eq!(plan.short_term.len(), 3);
        assert_eq!(plan.short_term[2].title, "Reach Out to Someone");

        // Sad already includes it once
        let plan = recommend(MoodLabel::Sad, 5, 5, &triggers, &Preferences::default());
        let count = plan
            .short_term
            .iter()
            .filter(|r| r.title == "Reach Out to Someone")
            .count();
        assert_eq!(count, 1);
    }
}
