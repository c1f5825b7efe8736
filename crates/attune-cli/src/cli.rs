//! CLI argument definitions using clap
//!
//! This module contains the clap structs for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Attune - Understand your moods, one check-in at a time
#[derive(Parser)]
#[command(name = "attune")]
#[command(about = "Rule-based mood classification, wellness recommendations and insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the user data dir, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a check-in text into a mood
    Classify {
        /// Check-in text
        text: String,

        /// Self-rated mood score (1-10)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        mood_score: Option<u8>,

        /// Self-rated energy level (1-10)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        energy: Option<u8>,

        /// Emotion the user selected (repeatable)
        #[arg(long = "emotion")]
        emotions: Vec<String>,

        /// Free-form context for the check-in
        #[arg(long)]
        context: Option<String>,

        /// File holding an upstream model's answer to blend in
        #[arg(long)]
        external: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Suggest wellness activities for a mood
    Recommend {
        /// Mood: anxious, happy, sad, tired, stressed, excited
        #[arg(short, long)]
        mood: String,

        /// Current mood score (1-10)
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u8).range(1..=10))]
        mood_score: u8,

        /// Current energy level (1-10)
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u8).range(1..=10))]
        energy: u8,

        /// Trigger to take into account (repeatable)
        #[arg(long = "trigger")]
        triggers: Vec<String>,

        /// Preferred activity level: low, moderate, high
        #[arg(long)]
        activity: Option<String>,

        /// Minutes available
        #[arg(long)]
        time: Option<u32>,

        /// Where you are: home, work, outdoors, any
        #[arg(long)]
        environment: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Analyze a check-in history file (CSV or JSON)
    Insights {
        /// History file; `.json` is read as JSON, anything else as CSV
        #[arg(short, long)]
        file: PathBuf,

        /// Window: week, month, quarter, year, all (default from config)
        #[arg(short, long)]
        timeframe: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
    },
}
