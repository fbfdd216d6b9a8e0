//! Axis-aligned rectangle geometry
//!
//! Every entity in the world is a `Rect` in world-space pixels, with the
//! origin at the top-left corner and y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected geometry
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("rectangle size must be positive, got {w}x{h}")]
    NonPositiveSize { w: f32, h: f32 },
}

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Build a rect from values already known to be well formed
    /// (draw geometry derived from live entity state).
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect for a collidable entity, rejecting degenerate sizes
    pub fn checked(x: f32, y: f32, w: f32, h: f32) -> Result<Self, GeometryError> {
        // Negated comparison so NaN sizes are rejected too
        if !(w > 0.0 && h > 0.0) {
            return Err(GeometryError::NonPositiveSize { w, h });
        }
        Ok(Self { x, y, w, h })
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Move so the right edge sits at `x`
    #[inline]
    pub fn set_right(&mut self, x: f32) {
        self.x = x - self.w;
    }

    /// Move so the left edge sits at `x`
    #[inline]
    pub fn set_left(&mut self, x: f32) {
        self.x = x;
    }

    /// Move so the bottom edge sits at `y`
    #[inline]
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Move so the top edge sits at `y`
    #[inline]
    pub fn set_top(&mut self, y: f32) {
        self.y = y;
    }

    /// Strict overlap test; rects that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Same rect shifted by `(dx, dy)`
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Shrink by `amount` on every side
    #[inline]
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.w - 2.0 * amount).max(0.0),
            (self.h - 2.0 * amount).max(0.0),
        )
    }
}
