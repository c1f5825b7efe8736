//! Insights command implementation

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use attune_core::{
    analyze, load_history_file, sort_chronologically, AttuneConfig, InsightsReport, Timeframe,
};

/// Load a history file and analyze it
///
/// The timeframe flag wins over `[insights] default_timeframe`.
pub fn build_report(
    file: &Path,
    timeframe: Option<&str>,
    config: &AttuneConfig,
) -> Result<InsightsReport> {
    let timeframe: Timeframe = match timeframe {
        Some(t) => t.parse().map_err(|e: String| anyhow!(e))?,
        None => config.insights.default_timeframe,
    };

    let mut history = load_history_file(file)
        .with_context(|| format!("Failed to load history from {}", file.display()))?;
    sort_chronologically(&mut history);
    if history.is_empty() {
        tracing::warn!("No check-ins found in {}", file.display());
    }

    Ok(analyze(&history, timeframe))
}

pub fn cmd_insights(
    file: &Path,
    timeframe: Option<&str>,
    config: &AttuneConfig,
    json: bool,
) -> Result<()> {
    let report = build_report(file, timeframe, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let summary = &report.summary;
    println!();
    println!("📈 Check-in Insights");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Entries:        {}", summary.total_entries);
    println!("   Average mood:   {:.1}/10", summary.average_mood);
    println!("   Average energy: {:.1}/10", summary.average_energy);
    if let Some(mood) = summary.most_common_mood {
        println!("   Most common:    {}", mood);
    }
    println!("   Stability:      {}/100", summary.mood_stability);
    println!("   Trend:          {}", summary.trend);

    if !report.patterns.is_empty() {
        println!();
        println!("   Patterns:");
        for pattern in &report.patterns {
            println!(
                "   • [{}] {} ({:.1}%, {}% confidence)",
                pattern.kind, pattern.description, pattern.frequency, pattern.confidence
            );
        }
    }

    if !report.triggers.is_empty() {
        println!();
        println!("   Triggers:");
        for trigger in &report.triggers {
            println!(
                "   • {:<16} {:>5.1}%  avg mood {:.1}  {}",
                trigger.trigger,
                trigger.frequency,
                trigger.average_mood,
                trigger.impact.as_str()
            );
        }
    }

    println!();
    println!("   Insights:");
    for line in &report.insights {
        println!("   • {}", line);
    }

    println!();
    println!("   Recommendations:");
    for line in &report.recommendations {
        println!("   • {}", line);
    }
    println!();

    Ok(())
}
