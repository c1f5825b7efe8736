//! CLI command implementations
//!
//! Commands are organized by engine component:
//! - `classify` - Mood classification of a check-in text
//! - `recommend` - Tiered wellness recommendations
//! - `insights` - History analysis from CSV/JSON files
//! - `serve` - Web server command

pub mod classify;
pub mod insights;
pub mod recommend;
pub mod serve;

// Re-export command functions for main.rs
pub use classify::*;
pub use insights::*;
pub use recommend::*;
pub use serve::*;
