//! Simulation state types
//!
//! Everything the engine mutates per tick lives here.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in screen space (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Quadrant an offset points into, using ±45° bands around each axis.
    ///
    /// Returns `None` for a zero offset. Band edges belong to the quadrant
    /// clockwise of them: exactly 45° is Down, exactly -45° is Right.
    pub fn from_offset(offset: Vec2) -> Option<Self> {
        if offset == Vec2::ZERO {
            return None;
        }
        let angle = offset.y.atan2(offset.x);
        let dir = if (-FRAC_PI_4..FRAC_PI_4).contains(&angle) {
            Direction::Right
        } else if (FRAC_PI_4..3.0 * FRAC_PI_4).contains(&angle) {
            Direction::Down
        } else if (-3.0 * FRAC_PI_4..-FRAC_PI_4).contains(&angle) {
            Direction::Up
        } else {
            Direction::Left
        };
        Some(dir)
    }
}

/// Which control scheme produced the latest steering intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Absolute pointer position (turn-rate limited)
    Target,
    /// Key-derived velocity vector
    #[default]
    Velocity,
}

/// Food types; exactly one of each is on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Normal,
    Special,
    Poison,
}

impl FoodKind {
    /// Collision priority order
    pub const ALL: [FoodKind; 3] = [FoodKind::Normal, FoodKind::Special, FoodKind::Poison];

    /// Segments added (or removed, when negative) on eating
    pub fn length_delta(self) -> i32 {
        match self {
            FoodKind::Normal => 1,
            FoodKind::Special => 4,
            FoodKind::Poison => -6,
        }
    }
}

/// Positions of the three food items
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Foods {
    pub normal: Vec2,
    pub special: Vec2,
    pub poison: Vec2,
}

impl Foods {
    pub fn get(&self, kind: FoodKind) -> Vec2 {
        match kind {
            FoodKind::Normal => self.normal,
            FoodKind::Special => self.special,
            FoodKind::Poison => self.poison,
        }
    }

    pub fn get_mut(&mut self, kind: FoodKind) -> &mut Vec2 {
        match kind {
            FoodKind::Normal => &mut self.normal,
            FoodKind::Special => &mut self.special,
            FoodKind::Poison => &mut self.poison,
        }
    }
}

/// Snake geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    /// Grid-aligned head (what gets rendered)
    pub head: Vec2,
    /// Continuous steering reference; only read to derive a direction
    pub exact_head: Vec2,
    /// Trailing segments, nearest to the head first
    pub bodies: Vec<Vec2>,
}

impl Snake {
    /// Snake coiled up entirely on `head`
    pub fn coiled(head: Vec2, length: usize) -> Self {
        Self {
            head,
            exact_head: head,
            bodies: vec![head; length],
        }
    }

    /// Move the head by `step`, dragging the body along behind it
    pub fn advance(&mut self, step: Vec2) {
        if !self.bodies.is_empty() {
            self.bodies.insert(0, self.head);
            self.bodies.pop();
        }
        self.head += step;
    }

    /// Grow (positive) or shrink (negative) by `delta` segments.
    ///
    /// New segments stack on the tail (or the head when there is no body).
    /// Shrinking stops at zero segments.
    pub fn change_length(&mut self, delta: i32) {
        if delta > 0 {
            let tail = self.bodies.last().copied().unwrap_or(self.head);
            self.bodies
                .extend(std::iter::repeat_n(tail, delta.unsigned_abs() as usize));
        } else if delta < 0 {
            let keep = self
                .bodies
                .len()
                .saturating_sub(delta.unsigned_abs() as usize);
            self.bodies.truncate(keep);
        }
    }

    /// Re-anchor the steering reference on the grid head
    pub fn reanchor(&mut self) {
        self.exact_head = self.head;
    }
}

/// Depth-2 FIFO of normalized velocity requests awaiting a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityQueue {
    next: Option<Vec2>,
    after_next: Option<Vec2>,
}

impl VelocityQueue {
    /// Queue a request; once both slots are full the second is overwritten
    pub fn push(&mut self, v: Vec2) {
        if self.next.is_none() {
            self.next = Some(v);
        } else {
            self.after_next = Some(v);
        }
    }

    /// Take the oldest request, shifting the second forward
    pub fn pop(&mut self) -> Option<Vec2> {
        let v = self.next.take()?;
        self.next = self.after_next.take();
        Some(v)
    }

    pub fn len(&self) -> usize {
        usize::from(self.next.is_some()) + usize::from(self.after_next.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_none()
    }

    pub fn peek(&self) -> (Option<Vec2>, Option<Vec2>) {
        (self.next, self.after_next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
            assert_eq!(dir.unit() + dir.opposite().unit(), Vec2::ZERO);
        }
    }

    #[test]
    fn test_from_offset_quadrants() {
        assert_eq!(Direction::from_offset(Vec2::ZERO), None);
        assert_eq!(Direction::from_offset(Vec2::new(10.0, 0.0)), Some(Direction::Right));
        assert_eq!(Direction::from_offset(Vec2::new(0.0, 10.0)), Some(Direction::Down));
        assert_eq!(Direction::from_offset(Vec2::new(-10.0, 0.0)), Some(Direction::Left));
        assert_eq!(Direction::from_offset(Vec2::new(0.0, -10.0)), Some(Direction::Up));
        // Mostly-horizontal offsets stay horizontal
        assert_eq!(Direction::from_offset(Vec2::new(10.0, 9.0)), Some(Direction::Right));
        assert_eq!(Direction::from_offset(Vec2::new(-10.0, -9.0)), Some(Direction::Left));
        assert_eq!(Direction::from_offset(Vec2::new(9.0, -10.0)), Some(Direction::Up));
    }

    #[test]
    fn test_advance_shifts_body() {
        let mut snake = Snake::coiled(Vec2::new(40.0, 40.0), 3);
        snake.advance(Vec2::new(20.0, 0.0));
        assert_eq!(snake.head, Vec2::new(60.0, 40.0));
        assert_eq!(snake.bodies, vec![Vec2::new(40.0, 40.0); 3]);

        snake.advance(Vec2::new(20.0, 0.0));
        assert_eq!(snake.bodies[0], Vec2::new(60.0, 40.0));
        assert_eq!(snake.bodies.len(), 3);
    }

    #[test]
    fn test_change_length() {
        let mut snake = Snake::coiled(Vec2::ZERO, 2);
        snake.bodies[1] = Vec2::new(20.0, 0.0);

        snake.change_length(4);
        assert_eq!(snake.bodies.len(), 6);
        assert!(snake.bodies[2..].iter().all(|b| *b == Vec2::new(20.0, 0.0)));

        snake.change_length(-6);
        assert!(snake.bodies.is_empty());

        // Clamped at zero
        snake.change_length(-6);
        assert!(snake.bodies.is_empty());

        // Empty body grows from the head
        snake.head = Vec2::new(80.0, 100.0);
        snake.change_length(1);
        assert_eq!(snake.bodies, vec![Vec2::new(80.0, 100.0)]);
    }

    #[test]
    fn test_velocity_queue_depth() {
        let a = Vec2::new(20.0, 0.0);
        let b = Vec2::new(0.0, 20.0);
        let c = Vec2::new(-20.0, 0.0);

        let mut queue = VelocityQueue::default();
        assert!(queue.is_empty());
        queue.push(a);
        queue.push(b);
        queue.push(c);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek(), (Some(a), Some(c)));

        assert_eq!(queue.pop(), Some(a));
        assert_eq!(queue.pop(), Some(c));
        assert_eq!(queue.pop(), None);
    }
}
