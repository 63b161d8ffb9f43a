//! Per-tick snake motion
//!
//! The engine turns two competing input schemes into one discrete heading per
//! tick. Key input arrives as velocity vectors which the engine integrates into
//! a continuous reference point (`exact_head`); pointer input overwrites that
//! point directly. Either way the heading is derived from the offset between the
//! reference point and the grid head, so there is a single steering path.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionResult, check_collision};
use super::state::{Direction, FoodKind, Foods, InputMode, Snake, VelocityQueue};
use super::vector::{floor_to_grid, last_cell, normalize};
use crate::config::{EngineConfig, validate_bounds};
use crate::consts::TURN_COOLDOWN_TICKS;
use crate::error::EngineError;

/// Read-only view of everything a renderer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub head: Vec2,
    pub bodies: Vec<Vec2>,
    pub foods: Foods,
    pub direction: Direction,
}

/// Snake simulation for one game session
///
/// Owns all mutable game state. Hosts call the setters whenever input or the
/// viewport changes and `update` once per tick; nothing takes effect until the
/// next `update`.
#[derive(Debug, Clone)]
pub struct MotionEngine<R = Pcg32> {
    width: f32,
    height: f32,
    grid_size: f32,
    snake: Snake,
    foods: Foods,
    /// Current velocity, normalized to `grid_size`
    velocity: Vec2,
    pending: VelocityQueue,
    input_mode: InputMode,
    direction: Direction,
    updates_since_last_turn: u32,
    ticks: u64,
    rng: R,
}

impl MotionEngine<Pcg32> {
    /// Build an engine seeded from `config.seed` (or a fresh random seed)
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("Motion engine seed: {}", seed);
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> MotionEngine<R> {
    /// Spawn a coiled snake and the three food items at random cells
    pub fn new(config: &EngineConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;

        let mut engine = Self {
            width: config.width,
            height: config.height,
            grid_size: config.grid_size,
            snake: Snake::coiled(Vec2::ZERO, config.starting_length),
            foods: Foods {
                normal: Vec2::ZERO,
                special: Vec2::ZERO,
                poison: Vec2::ZERO,
            },
            velocity: Direction::Right.unit() * config.grid_size,
            pending: VelocityQueue::default(),
            input_mode: InputMode::Velocity,
            direction: Direction::Right,
            updates_since_last_turn: 0,
            ticks: 0,
            rng,
        };

        let head = engine.random_cell();
        engine.snake = Snake::coiled(head, config.starting_length);
        for kind in FoodKind::ALL {
            let cell = engine.random_cell();
            *engine.foods.get_mut(kind) = cell;
        }

        log::info!(
            "Spawned snake at ({}, {}) on {}x{} board, grid {}",
            head.x,
            head.y,
            engine.width,
            engine.height,
            engine.grid_size
        );
        Ok(engine)
    }

    /// Queue a key-derived velocity for the next ticks.
    ///
    /// The zero vector is ignored so a neutral key state never cancels motion.
    /// Up to two requests are buffered; further ones replace the second.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if velocity == Vec2::ZERO {
            return;
        }
        self.pending.push(normalize(velocity, self.grid_size));
    }

    /// Steer toward an absolute point (pointer control, unbuffered)
    pub fn set_target(&mut self, target: Vec2) {
        self.input_mode = InputMode::Target;
        self.snake.exact_head = target;
    }

    /// Resize the board, moving any food that is now off the board
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        if let Err(err) = validate_bounds(width, height, self.grid_size) {
            log::warn!("Ignoring resize to {}x{}: {}", width, height, err);
            return Err(err);
        }
        self.width = width;
        self.height = height;

        for kind in FoodKind::ALL {
            if !self.in_bounds(self.foods.get(kind)) {
                let cell = self.random_cell();
                *self.foods.get_mut(kind) = cell;
                log::debug!("Relocated {:?} food to ({}, {}) after resize", kind, cell.x, cell.y);
            }
        }
        log::info!("Board resized to {}x{}", width, height);
        Ok(())
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) -> CollisionResult {
        if let Some(velocity) = self.pending.pop() {
            self.input_mode = InputMode::Velocity;
            self.apply_velocity(velocity);
        }

        if self.input_mode == InputMode::Velocity {
            self.snake.exact_head += self.velocity;
        }

        if let Some(dir) = Direction::from_offset(self.snake.exact_head - self.snake.head) {
            self.steer(dir);
        }

        self.snake.advance(self.direction.unit() * self.grid_size);

        if self.wrap_head() {
            // A stale reference point across the board would force a turn
            self.snake.reanchor();
        }

        let result = check_collision(self.snake.head, &self.foods, &self.snake.bodies, self.grid_size);
        if let Some(kind) = result.food() {
            self.snake.change_length(kind.length_delta());
            let cell = self.random_cell();
            *self.foods.get_mut(kind) = cell;
            log::debug!(
                "Ate {:?} food, length now {}; respawned at ({}, {})",
                kind,
                self.snake.bodies.len(),
                cell.x,
                cell.y
            );
        } else if result.is_fatal() {
            log::debug!("Self intersection at ({}, {})", self.snake.head.x, self.snake.head.y);
        }

        self.updates_since_last_turn = self.updates_since_last_turn.saturating_add(1);
        self.ticks += 1;
        result
    }

    /// Make `velocity` current, re-anchoring the reference point on a change
    fn apply_velocity(&mut self, velocity: Vec2) {
        if velocity != self.velocity {
            self.snake.reanchor();
            self.velocity = velocity;
        }
    }

    /// Turn toward `dir` unless it is a reversal or the pointer turn cooldown
    /// has not elapsed
    fn steer(&mut self, dir: Direction) {
        if dir == self.direction || dir == self.direction.opposite() {
            return;
        }
        if self.input_mode == InputMode::Target && self.updates_since_last_turn < TURN_COOLDOWN_TICKS {
            return;
        }
        log::debug!("Turn {:?} -> {:?}", self.direction, dir);
        self.direction = dir;
        self.updates_since_last_turn = 0;
    }

    /// Re-enter from the opposite edge when the head leaves the board.
    /// Returns true if it wrapped.
    fn wrap_head(&mut self) -> bool {
        let head = &mut self.snake.head;
        let mut wrapped = false;

        if head.x < 0.0 {
            head.x = last_cell(self.width, self.grid_size);
            wrapped = true;
        } else if head.x >= self.width {
            head.x = 0.0;
            wrapped = true;
        }

        if head.y < 0.0 {
            head.y = last_cell(self.height, self.grid_size);
            wrapped = true;
        } else if head.y >= self.height {
            head.y = 0.0;
            wrapped = true;
        }

        wrapped
    }

    fn in_bounds(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    fn random_cell(&mut self) -> Vec2 {
        let x = self.rng.random_range(0.0..self.width);
        let y = self.rng.random_range(0.0..self.height);
        Vec2::new(floor_to_grid(x, self.grid_size), floor_to_grid(y, self.grid_size))
    }

    /// Put a food item on a specific cell (scripted scenarios, tests)
    pub fn place_food(&mut self, kind: FoodKind, at: Vec2) {
        *self.foods.get_mut(kind) = at;
    }

    /// Move the snake to `at`, coiling the body there
    pub fn place_head(&mut self, at: Vec2) {
        let len = self.snake.bodies.len();
        self.snake = Snake::coiled(at, len);
    }

    pub fn head(&self) -> Vec2 {
        self.snake.head
    }

    pub fn exact_head(&self) -> Vec2 {
        self.snake.exact_head
    }

    pub fn bodies(&self) -> &[Vec2] {
        &self.snake.bodies
    }

    pub fn food(&self, kind: FoodKind) -> Vec2 {
        self.foods.get(kind)
    }

    pub fn foods(&self) -> &Foods {
        &self.foods
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn pending(&self) -> &VelocityQueue {
        &self.pending
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn updates_since_last_turn(&self) -> u32 {
        self.updates_since_last_turn
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn grid_size(&self) -> f32 {
        self.grid_size
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.ticks,
            head: self.snake.head,
            bodies: self.snake.bodies.clone(),
            foods: self.foods,
            direction: self.direction,
        }
    }
}
