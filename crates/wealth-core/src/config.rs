//! Configuration System
//!
//! Loads run parameters from tuning.toml so they can be adjusted without
//! recompiling. CLI flags override anything loaded here.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub model: ModelConfig,
}

/// Run-length and output parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub default_ticks: u64,
    pub snapshot_interval: u64,
    pub default_seed: u64,
}

/// Model construction parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub agents: usize,
    pub width: u32,
    pub height: u32,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the given path, or fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path.as_ref()).unwrap_or_else(|e| {
            warn!(
                path = %path.as_ref().display(),
                error = %e,
                "could not load tuning file, using defaults"
            );
            Self::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                default_ticks: 100,
                snapshot_interval: 25,
                default_seed: 42,
            },
            model: ModelConfig {
                agents: 50,
                width: 10,
                height: 10,
            },
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
