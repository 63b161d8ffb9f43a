//! Engine configuration
//!
//! Loaded from JSON by hosts; every field is optional and falls back to the
//! defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::EngineError;

/// Board and snake setup for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board width in pixels
    pub width: f32,
    /// Board height in pixels
    pub height: f32,
    /// Cell size / per-tick step in pixels
    pub grid_size: f32,
    /// Body segments at spawn
    pub starting_length: usize,
    /// RNG seed for spawn and respawn placement (random when absent)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid_size: DEFAULT_GRID_SIZE,
            starting_length: DEFAULT_STARTING_LENGTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Default config on a board of the given size
    pub fn with_bounds(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        validate_bounds(self.width, self.height, self.grid_size)
    }
}

/// Check that a board of `width`x`height` can hold at least one cell
pub fn validate_bounds(width: f32, height: f32, grid_size: f32) -> Result<(), EngineError> {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return Err(EngineError::InvalidGridSize(grid_size));
    }
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(EngineError::InvalidBounds { width, height });
    }
    if grid_size > width || grid_size > height {
        return Err(EngineError::GridTooLarge {
            grid_size,
            width,
            height,
        });
    }
    Ok(())
}
