//! Attune Core Library
//!
//! Rule-based mood and wellness engine:
//! - Mood classifier for free-text check-ins
//! - Tiered wellness recommendations
//! - Insights over check-in history (trends, patterns, trigger impact)
//! - History import from CSV and JSON
//! - Blending of upstream model classifications
//! - Configuration loading

pub mod ai;
pub mod classifier;
pub mod config;
pub mod error;
pub mod import;
pub mod insights;
pub mod models;
pub mod recommend;

pub use ai::{blend_analysis, parse_external_analysis, ExternalAnalysis};
pub use classifier::classify;
pub use config::AttuneConfig;
pub use error::{Error, Result};
pub use import::{load_history_file, parse_history_csv, parse_history_json, sort_chronologically};
pub use insights::{analyze, InsightsReport};
pub use models::*;
pub use recommend::recommend;
