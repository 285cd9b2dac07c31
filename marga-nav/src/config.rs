//! Configuration loading for marga-nav

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Grid generation settings
#[derive(Clone, Debug, Deserialize)]
pub struct GridConfig {
    /// Grid dimension in cells (default: 20)
    #[serde(default = "default_size")]
    pub size: usize,

    /// Probability that a cell is generated as a wall (default: 0.3)
    #[serde(default = "default_wall_probability")]
    pub wall_probability: f64,

    /// RNG seed for maze generation.
    /// 0 = entropy-based seed (non-deterministic).
    #[serde(default)]
    pub seed: u64,
}

/// Terminal rendering settings
#[derive(Clone, Debug, Deserialize)]
pub struct RenderConfig {
    /// Delay between search steps in milliseconds (default: 100).
    /// Pacing is a policy of the render boundary, not of the engine.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Clear the terminal between frames with ANSI escapes (default: true)
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            wall_probability: default_wall_probability(),
            seed: 0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
            clear_screen: default_clear_screen(),
        }
    }
}

// Default value functions
fn default_size() -> usize {
    20
}
fn default_wall_probability() -> f64 {
    0.3
}
fn default_step_delay_ms() -> u64 {
    100
}
fn default_clear_screen() -> bool {
    true
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: NavConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
