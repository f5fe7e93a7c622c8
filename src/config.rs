use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Side;
use crate::placement::DEFAULT_PLACEMENT_QUEUE;

/// Knobs for one placement computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Allowed sides in priority order. An empty list means the default
    /// queue.
    pub placements: Vec<Side>,
    /// Gap in pixels between the reference edge and the overlay, typically
    /// the arrow size.
    pub offset: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            placements: DEFAULT_PLACEMENT_QUEUE.to_vec(),
            offset: 8.0,
        }
    }
}

/// Knobs for the scroll reactor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorConfig {
    /// Trailing-edge debounce delay for scroll recomputation, in
    /// milliseconds.
    pub debounce_ms: u64,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub placement: PlacementConfig,
    pub reactor: ReactorConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Flat on-disk shape: every field optional, absent fields keep their
/// defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    placements: Option<Vec<Side>>,
    offset: Option<f32>,
    debounce_ms: Option<u64>,
}

/// Load a config overlay from a JSON or JSON5 file. `None` yields the
/// defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        // Retry as JSON5 so hand-written files may use comments and
        // trailing commas; report the strict-JSON error if both fail.
        Err(json_err) => json5::from_str(&contents)
            .map_err(|_| ConfigError::Parse(json_err.to_string()))?,
    };

    if let Some(placements) = parsed.placements {
        config.placement.placements = placements;
    }
    if let Some(offset) = parsed.offset {
        config.placement.offset = offset;
    }
    if let Some(debounce_ms) = parsed.debounce_ms {
        config.reactor.debounce_ms = debounce_ms;
    }
    Ok(config)
}
