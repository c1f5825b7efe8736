//! Attune CLI - Mood and wellness insight engine
//!
//! Usage:
//!   attune classify "TEXT"          Classify a check-in
//!   attune recommend --mood sad     Suggest wellness activities
//!   attune insights --file CSV      Analyze check-in history
//!   attune serve --port 3000        Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use attune_core::AttuneConfig;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = AttuneConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify {
            text,
            mood_score,
            energy,
            emotions,
            context,
            external,
            json,
        } => commands::cmd_classify(
            &text,
            commands::ClassifyOptions {
                mood_score,
                energy_level: energy,
                emotions,
                context,
                external,
            },
            json,
        ),
        Commands::Recommend {
            mood,
            mood_score,
            energy,
            triggers,
            activity,
            time,
            environment,
            json,
        } => commands::cmd_recommend(
            &mood,
            mood_score,
            energy,
            &triggers,
            activity.as_deref(),
            time,
            environment.as_deref(),
            json,
        ),
        Commands::Insights {
            file,
            timeframe,
            json,
        } => commands::cmd_insights(&file, timeframe.as_deref(), &config, json),
        Commands::Serve { port, host } => commands::cmd_serve(config, host, port).await,
    }
}
