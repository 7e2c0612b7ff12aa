use handproxy_common::ObjectId;
use handproxy_sim::SimConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tracker configuration, loadable from YAML.
///
/// Unset fields take their defaults, so a config file only needs to name
/// what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Externally supplied left visual. None means the tracker creates a
    /// placeholder primitive and owns it.
    pub left_visual: Option<ObjectId>,
    /// Externally supplied right visual.
    pub right_visual: Option<ObjectId>,
    /// Start with both visuals hidden.
    pub make_invisible: bool,
    /// Uniform scale for created placeholder primitives.
    pub proxy_scale: f32,
    /// Enable the keyboard/mouse simulation fallback.
    pub simulate: bool,
    /// Simulated movement speed, world units per second.
    pub sim_move_speed: f32,
    /// Simulated rotation speed, degrees per second per unit of pointer delta.
    pub sim_rotate_speed: f32,
    /// Suppress simulation deltas for a hand whose device applied a pose this
    /// tick. Off by default: live device data and simulated input layer.
    pub exclusive_sim: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            left_visual: None,
            right_visual: None,
            make_invisible: false,
            proxy_scale: 0.01,
            simulate: true,
            sim_move_speed: 1.0,
            sim_rotate_speed: 60.0,
            exclusive_sim: false,
        }
    }
}

/// Errors from loading a tracker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl TrackerConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// The simulation-speed subset of this config.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            move_speed: self.sim_move_speed,
            rotate_speed: self.sim_rotate_speed,
        }
    }
}
