//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One state transition per `update` call, no timing of its own
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod state;
pub mod vector;

pub use collision::{CollisionResult, check_collision};
pub use engine::{MotionEngine, Snapshot};
pub use state::{Direction, FoodKind, Foods, InputMode, Snake, VelocityQueue};
pub use vector::{floor_to_grid, last_cell, normalize, same_cell};
