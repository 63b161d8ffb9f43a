//! Grid Snake - motion engine for a grid-based snake
//!
//! Core modules:
//! - `sim`: Deterministic simulation (direction arbitration, movement, collisions)
//! - `input`: Key bindings that turn held keys into velocity requests
//! - `config`: Engine configuration and validation
//! - `wasm`: Browser bindings (wasm32 only)

pub mod config;
pub mod error;
pub mod input;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::EngineConfig;
pub use error::EngineError;
pub use input::{HeldKeys, Key};
pub use sim::{CollisionResult, Direction, FoodKind, InputMode, MotionEngine, Snapshot};

/// Engine configuration constants
pub mod consts {
    /// Pixel distance the head advances per tick
    pub const DEFAULT_GRID_SIZE: f32 = 20.0;
    /// Segments the snake spawns with (all coiled on the head)
    pub const DEFAULT_STARTING_LENGTH: usize = 10;

    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Minimum ticks between accepted turns under pointer control
    pub const TURN_COOLDOWN_TICKS: u32 = 2;

    /// Host tick cadence in milliseconds (40 Hz)
    pub const TICK_INTERVAL_MS: u32 = 25;
}
