//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use attune_core::insights::Trend;
use attune_core::{AttuneConfig, MoodLabel, Timeframe};
use tempfile::NamedTempFile;

use crate::commands::{self, ClassifyOptions};

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Ten daily check-ins: five low days, then five good ones
fn improving_csv() -> String {
    let mut csv = String::from("date,mood,mood_score,energy_level,triggers,emotions\n");
    for day in 1..=10 {
        let (mood, score) = if day <= 5 { ("sad", 3) } else { ("happy", 8) };
        csv.push_str(&format!("2024-02-{:02},{},{},6,,\n", day, mood, score));
    }
    csv
}

// ========== Classify Command Tests ==========

#[test]
fn test_build_classification_with_hints() {
    let options = ClassifyOptions {
        mood_score: Some(3),
        energy_level: Some(4),
        ..Default::default()
    };
    let analysis =
        commands::build_classification("I'm anxious and nervous about my boss", &options).unwrap();
    assert_eq!(analysis.detected_mood, MoodLabel::Anxious);
    assert_eq!(analysis.confidence, 85);
}

#[test]
fn test_build_classification_blends_external_file() {
    let external = write_temp(".txt", r#"Answer: {"mood": "sad", "confidence": 0.6}"#);
    let options = ClassifyOptions {
        external: Some(external.path().to_path_buf()),
        ..Default::default()
    };
    let analysis = commands::build_classification("so tired today", &options).unwrap();
    assert_eq!(analysis.detected_mood, MoodLabel::Sad);
    assert_eq!(analysis.confidence, 60);
}

#[test]
fn test_build_classification_missing_external_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = ClassifyOptions {
        external: Some(dir.path().join("missing.json")),
        ..Default::default()
    };
    let err = commands::build_classification("fine", &options).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_cmd_classify() {
    assert!(commands::cmd_classify("great day", ClassifyOptions::default(), false).is_ok());
    assert!(commands::cmd_classify("great day", ClassifyOptions::default(), true).is_ok());
}

// ========== Recommend Command Tests ==========

#[test]
fn test_build_plan() {
    let plan = commands::build_plan("anxious", 5, 5, &[], None, None, None).unwrap();
    assert_eq!(plan.immediate.len(), 2);
    assert_eq!(plan.immediate[0].title, "Box Breathing");
}

#[test]
fn test_build_plan_preferences() {
    let plan = commands::build_plan(
        "stressed",
        5,
        7,
        &[],
        Some("high"),
        Some(45),
        Some("outdoors"),
    )
    .unwrap();
    assert_eq!(plan.short_term[0].title, "Cardio Burst");
}

#[test]
fn test_build_plan_rejects_unknown_values() {
    assert!(commands::build_plan("grumpy", 5, 5, &[], None, None, None).is_err());
    assert!(commands::build_plan("sad", 5, 5, &[], Some("extreme"), None, None).is_err());
    assert!(commands::build_plan("sad", 5, 5, &[], None, None, Some("moon")).is_err());
}

#[test]
fn test_cmd_recommend() {
    let triggers = vec!["social".to_string()];
    assert!(commands::cmd_recommend("tired", 4, 2, &triggers, None, Some(10), None, false).is_ok());
}

// ========== Insights Command Tests ==========

#[test]
fn test_build_report_from_csv() {
    let file = write_temp(".csv", &improving_csv());
    let report =
        commands::build_report(file.path(), None, &AttuneConfig::default()).unwrap();
    assert_eq!(report.summary.total_entries, 10);
    assert_eq!(report.summary.trend, Trend::Improving);
}

#[test]
fn test_build_report_from_json_sorts_history() {
    let json = r#"[
        {"date": "2024-02-10", "mood": "happy", "mood_score": 8, "energy_level": 6},
        {"date": "2024-02-01", "mood": "sad", "mood_score": 3, "energy_level": 6}
    ]"#;
    let file = write_temp(".json", json);
    let report =
        commands::build_report(file.path(), None, &AttuneConfig::default()).unwrap();
    assert_eq!(report.summary.trend, Trend::Improving);
}

#[test]
fn test_build_report_timeframe_flag_and_config_default() {
    let file = write_temp(".csv", &improving_csv());

    let report =
        commands::build_report(file.path(), Some("week"), &AttuneConfig::default()).unwrap();
    assert_eq!(report.summary.total_entries, 7);

    let mut config = AttuneConfig::default();
    config.insights.default_timeframe = Timeframe::Week;
    let report = commands::build_report(file.path(), None, &config).unwrap();
    assert_eq!(report.summary.total_entries, 7);
}

#[test]
fn test_build_report_errors() {
    let file = write_temp(".csv", &improving_csv());
    let err = commands::build_report(file.path(), Some("decade"), &AttuneConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("Unknown timeframe"));

    let bad = write_temp(".csv", "date,mood,mood_score,energy_level\n2024-01-01,meh,5,5\n");
    assert!(commands::build_report(bad.path(), None, &AttuneConfig::default()).is_err());
}

#[test]
fn test_build_report_header_only_file() {
    let file = write_temp(".csv", "date,mood,mood_score,energy_level,triggers,emotions\n");
    let report =
        commands::build_report(file.path(), None, &AttuneConfig::default()).unwrap();
    assert_eq!(report.summary.total_entries, 0);
    assert!(report.summary.most_common_mood.is_none());
    assert_eq!(report.insights.len(), 1);
}

#[test]
fn test_cmd_insights_text_and_json() {
    let file = write_temp(".csv", &improving_csv());
    let config = AttuneConfig::default();
    assert!(commands::cmd_insights(file.path(), None, &config, false).is_ok());
    assert!(commands::cmd_insights(file.path(), None, &config, true).is_ok());
}

// ========== Serve Command Tests ==========

#[test]
fn test_apply_overrides() {
    let config = commands::apply_overrides(AttuneConfig::default(), None, Some(8081));
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "127.0.0.1");

    let config =
        commands::apply_overrides(AttuneConfig::default(), Some("0.0.0.0".to_string()), None);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
}
