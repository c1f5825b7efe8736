//! Configuration loading
//!
//! Resolution order:
//! 1. Explicit path (CLI `--config`)
//! 2. Override file at `<data_local_dir>/attune/config.toml`
//! 3. Embedded defaults from `config/attune.toml`
//!
//! Missing keys in an override file fall back to the defaults. `ATTUNE_HOST`
//! and `ATTUNE_PORT` are applied last.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::Timeframe;

/// Embedded default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../config/attune.toml");

pub const HOST_ENV: &str = "ATTUNE_HOST";
pub const PORT_ENV: &str = "ATTUNE_PORT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Empty means same-origin only
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: Vec::new(),
        }
    }
}

/// Request size limits enforced by the HTTP layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_text_chars: usize,
    pub max_history_entries: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_text_chars: 5000,
            max_history_entries: 3660,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InsightsSettings {
    pub default_timeframe: Timeframe,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AttuneConfig {
    pub server: ServerSettings,
    pub limits: Limits,
    pub insights: InsightsSettings,
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("attune").join("config.toml"))
}

impl AttuneConfig {
    /// Load configuration and apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::load_file(explicit)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration without looking at the environment
    pub fn load_file(explicit: Option<&Path>) -> Result<Self> {
        let override_path = match explicit {
            Some(path) if path.exists() => Some(path.to_path_buf()),
            Some(path) => {
                warn!("Config file {} not found, using defaults", path.display());
                None
            }
            None => default_config_path().filter(|p| p.exists()),
        };

        match override_path {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                Self::parse(&content)
            }
            None => Self::parse(DEFAULT_CONFIG),
        }
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply host/port overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("Invalid {}: {}", PORT_ENV, port)))?;
        }
        Ok(())
    }
}
