//! Resolver configuration
//!
//! Loaded from YAML. Every field has a default, so an empty document is a
//! valid configuration.

use crate::anchor::WindowSearch;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid window bounds: {0}")]
    InvalidWindow(String),
}

fn default_max_window() -> usize {
    WindowSearch::DEFAULT_MAX_WINDOW
}

fn default_min_window() -> usize {
    WindowSearch::DEFAULT_MIN_WINDOW
}

fn default_max_citations() -> usize {
    12
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Largest word window tried first
    #[serde(default = "default_max_window")]
    pub max_window: usize,
    /// Smallest word window; shorter quotes use direct containment
    #[serde(default = "default_min_window")]
    pub min_window: usize,
    /// How many citations of one answer are kept for display
    #[serde(default = "default_max_citations")]
    pub max_citations: usize,
    /// Pause between the page jump and the page-text fetch, in milliseconds
    #[serde(default)]
    pub settle_delay_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_window: default_max_window(),
            min_window: default_min_window(),
            max_citations: default_max_citations(),
            settle_delay_ms: 0,
        }
    }
}

impl ResolverConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.window_search()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// The validated window bounds.
    pub fn window_search(&self) -> Result<WindowSearch, ConfigError> {
        WindowSearch::new(self.max_window, self.min_window)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
