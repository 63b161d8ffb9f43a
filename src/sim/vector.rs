//! Vector and grid helpers
//!
//! Stateless: velocity normalization and pixel-to-cell quantization.

use glam::Vec2;

/// Scale `v` to exactly `magnitude` length.
///
/// The zero vector stays zero (it means "no movement requested").
#[inline]
pub fn normalize(v: Vec2, magnitude: f32) -> Vec2 {
    let len = v.x.hypot(v.y);
    if len == 0.0 {
        return Vec2::ZERO;
    }
    v / len * magnitude
}

/// Largest multiple of `grid_size` not exceeding `pixel`
#[inline]
pub fn floor_to_grid(pixel: f32, grid_size: f32) -> f32 {
    (pixel / grid_size).floor() * grid_size
}

/// Start of the last grid cell that lies strictly inside `[0, bound)`
///
/// Re-entry coordinate when the head wraps off the low edge.
#[inline]
pub fn last_cell(bound: f32, grid_size: f32) -> f32 {
    ((bound / grid_size).ceil() * grid_size - grid_size).max(0.0)
}

/// Whether two grid-aligned positions occupy the same cell.
///
/// Compares with half a cell of slack so accumulated float error in the
/// stepped head never hides a hit.
#[inline]
pub fn same_cell(a: Vec2, b: Vec2, grid_size: f32) -> bool {
    let half = grid_size * 0.5;
    (a.x - b.x).abs() < half && (a.y - b.y).abs() < half
}
