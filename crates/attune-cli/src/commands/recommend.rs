//! Recommend command implementation

use anyhow::{anyhow, Result};
use attune_core::{
    recommend, ActivityLevel, Environment, MoodLabel, Preferences, WellnessPlan,
    WellnessRecommendation,
};

/// Parse the mood and preference flags and build the plan
pub fn build_plan(
    mood: &str,
    mood_score: u8,
    energy_level: u8,
    triggers: &[String],
    activity: Option<&str>,
    time: Option<u32>,
    environment: Option<&str>,
) -> Result<WellnessPlan> {
    let mood: MoodLabel = mood.parse().map_err(|e: String| anyhow!(e))?;
    let activity_level = activity
        .map(|a| a.parse::<ActivityLevel>())
        .transpose()
        .map_err(|e| anyhow!(e))?;
    let environment = environment
        .map(|e| e.parse::<Environment>())
        .transpose()
        .map_err(|e| anyhow!(e))?;

    let prefs = Preferences {
        activity_level,
        time_available_minutes: time,
        environment,
    };

    Ok(recommend(mood, mood_score, energy_level, triggers, &prefs))
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_recommend(
    mood: &str,
    mood_score: u8,
    energy_level: u8,
    triggers: &[String],
    activity: Option<&str>,
    time: Option<u32>,
    environment: Option<&str>,
    json: bool,
) -> Result<()> {
    let plan = build_plan(
        mood,
        mood_score,
        energy_level,
        triggers,
        activity,
        time,
        environment,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!();
    print_tier("⚡ Right now", &plan.immediate);
    print_tier("📅 Today", &plan.short_term);
    print_tier("🌱 Ongoing", &plan.long_term);

    Ok(())
}

fn print_tier(heading: &str, items: &[WellnessRecommendation]) {
    println!("{}", heading);
    for item in items {
        println!(
            "   {} ({} min, {})",
            item.title, item.duration_minutes, item.difficulty.as_str()
        );
        println!("      {}", item.description);
        for (i, step) in item.instructions.iter().enumerate() {
            println!("      {}. {}", i + 1, step);
        }
    }
    println!();
}
