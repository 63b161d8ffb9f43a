//! Engine error types

use thiserror::Error;

/// Rejected configuration or bounds
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid bounds {width}x{height}: both must be finite and positive")]
    InvalidBounds { width: f32, height: f32 },

    #[error("invalid grid size {0}: must be finite and positive")]
    InvalidGridSize(f32),

    #[error("grid size {grid_size} does not fit inside {width}x{height}")]
    GridTooLarge {
        grid_size: f32,
        width: f32,
        height: f32,
    },

    #[error("failed to read engine config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),
}
