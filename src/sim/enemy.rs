//! Patrolling enemies

use serde::{Deserialize, Serialize};

use super::geometry::{GeometryError, Rect};
use crate::consts::*;

/// A walker that paces back and forth
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Horizontal velocity (pixels/frame); magnitude is constant
    pub vel_x: f32,
}

impl Enemy {
    /// Standard 40x40 enemy, initially walking left
    pub fn new(x: f32, y: f32) -> Result<Self, GeometryError> {
        Ok(Self {
            rect: Rect::checked(x, y, ENEMY_SIZE, ENEMY_SIZE)?,
            vel_x: -ENEMY_SPEED,
        })
    }

    /// Walk one frame, turning around when no platform is underfoot.
    ///
    /// "Underfoot" is approximated by overlapping any platform at all, so a
    /// gap anywhere along the walk turns the enemy too.
    pub fn update(&mut self, platforms: &[Rect]) {
        self.rect.x += self.vel_x;
        let on_platform = platforms.iter().any(|p| self.rect.intersects(p));
        if !on_platform {
            self.vel_x = -self.vel_x;
        }
    }
}
