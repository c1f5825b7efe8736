//! Classify command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use attune_core::{blend_analysis, classify, MoodAnalysis, MoodHints};

/// Optional inputs for `attune classify`
#[derive(Debug, Default)]
pub struct ClassifyOptions {
    pub mood_score: Option<u8>,
    pub energy_level: Option<u8>,
    pub emotions: Vec<String>,
    pub context: Option<String>,
    pub external: Option<PathBuf>,
}

/// Run the classifier, blending in an external analysis file if given
pub fn build_classification(text: &str, options: &ClassifyOptions) -> Result<MoodAnalysis> {
    let hints = MoodHints {
        emotions: options.emotions.clone(),
        mood_score: options.mood_score,
        energy_level: options.energy_level,
        context: options.context.clone(),
    };

    let local = classify(text, &hints);

    match &options.external {
        Some(path) => {
            tracing::debug!("Blending external analysis from {}", path.display());
            let response = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(blend_analysis(&local, &response))
        }
        None => Ok(local),
    }
}

pub fn cmd_classify(text: &str, options: ClassifyOptions, json: bool) -> Result<()> {
    let analysis = build_classification(text, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!();
    println!("🧭 Mood: {} ({}% confidence)", analysis.detected_mood, analysis.confidence);
    println!("   Severity: {}", analysis.severity);
    if !analysis.emotions.is_empty() {
        println!("   Emotions: {}", analysis.emotions.join(", "));
    }
    if !analysis.triggers.is_empty() {
        let triggers: Vec<&str> = analysis.triggers.iter().map(|t| t.as_str()).collect();
        println!("   Triggers: {}", triggers.join(", "));
    }
    println!();
    println!("   {}", analysis.analysis);
    println!();
    println!("   Suggestions:");
    for line in &analysis.recommendations {
        println!("   • {}", line);
    }
    println!();

    Ok(())
}
