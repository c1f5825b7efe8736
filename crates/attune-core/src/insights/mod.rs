//! Insights Engine - longitudinal analysis of check-in history
//!
//! Mines a time-ordered series of check-ins for:
//!
//! - **Summary** - averages, most common mood, stability and trend
//! - **Patterns** - weekday, mood, energy and trigger effects
//! - **Trigger ranking** - how often each trigger appears and how mood fares with it
//! - **Narrative** - prioritized recommendations and insight sentences
//!
//! ## Usage
//!
//! ```rust,ignore
//! use attune_core::insights::analyze;
//! use attune_core::Timeframe;
//!
//! let report = analyze(&history, Timeframe::Month);
//! println!("trend: {}", report.summary.trend);
//! ```

pub mod engine;
pub mod narrative;
pub mod patterns;
pub mod stats;
pub mod triggers;
pub mod types;

pub use engine::{analyze, empty_report, filter_timeframe};
pub use patterns::detect_patterns;
pub use triggers::rank_triggers;
pub use types::{Impact, InsightSummary, InsightsReport, Pattern, PatternKind, Trend, TriggerImpact};
