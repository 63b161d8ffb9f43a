//! Collision detection against food and the snake's own body
//!
//! Evaluated once per tick on the post-move head. Food is checked before the
//! body, in `FoodKind::ALL` order, so a cell holding both food and a body
//! segment counts as food.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{FoodKind, Foods};
use super::vector::same_cell;

/// Outcome of a tick's collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionResult {
    Nothing,
    /// Head ran into its own body (game over for the caller)
    SelfIntersection,
    NormalFood,
    SpecialFood,
    PoisonFood,
}

impl CollisionResult {
    pub fn from_food(kind: FoodKind) -> Self {
        match kind {
            FoodKind::Normal => CollisionResult::NormalFood,
            FoodKind::Special => CollisionResult::SpecialFood,
            FoodKind::Poison => CollisionResult::PoisonFood,
        }
    }

    /// Food eaten this tick, if any
    pub fn food(self) -> Option<FoodKind> {
        match self {
            CollisionResult::NormalFood => Some(FoodKind::Normal),
            CollisionResult::SpecialFood => Some(FoodKind::Special),
            CollisionResult::PoisonFood => Some(FoodKind::Poison),
            CollisionResult::Nothing | CollisionResult::SelfIntersection => None,
        }
    }

    /// Whether the caller should treat this as end of game
    pub fn is_fatal(self) -> bool {
        self == CollisionResult::SelfIntersection
    }
}

/// Check the head against every food item, then against the body
pub fn check_collision(head: Vec2, foods: &Foods, bodies: &[Vec2], grid_size: f32) -> CollisionResult {
    if let Some(kind) = FoodKind::ALL
        .into_iter()
        .find(|&kind| same_cell(head, foods.get(kind), grid_size))
    {
        return CollisionResult::from_food(kind);
    }

    if bodies.iter().any(|&body| same_cell(head, body, grid_size)) {
        return CollisionResult::SelfIntersection;
    }

    CollisionResult::Nothing
}
