//! The player character: input, physics, collision and animation state

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::block::Block;
use super::collision::{colliders, resolve_horizontal, resolve_vertical};
use super::geometry::{GeometryError, Rect};
use super::input::FrameInput;
use crate::consts::*;

/// Which way the character faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1 for right, -1 for left
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Velocity in pixels/frame
    pub vel: Vec2,
    pub on_ground: bool,

    pub is_crouching: bool,
    /// Eased crouch amount in [0, 1]
    pub crouch_progress: f32,

    pub facing: Facing,
    /// Running flip animation after a facing change
    pub turning: bool,
    /// Seconds left in the flip animation
    pub turn_timer: f32,

    /// Seconds until the next blink
    pub blink_timer: f32,
    /// Seconds the eyes stay closed (eyes are open when <= 0)
    pub blink_duration: f32,

    /// Walk cycle phase (radians); zero when not walking
    pub walk_timer: f32,
}

impl Player {
    /// Spawn a player with its top-left corner at `(x, y)`
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Result<Self, GeometryError> {
        Ok(Self {
            rect: Rect::checked(x, y, PLAYER_W, PLAYER_H)?,
            vel: Vec2::ZERO,
            on_ground: false,
            is_crouching: false,
            crouch_progress: 0.0,
            facing: Facing::Right,
            turning: false,
            turn_timer: 0.0,
            blink_timer: next_blink_interval(rng),
            blink_duration: 0.0,
            walk_timer: 0.0,
        })
    }

    /// Interpret the held keys for this frame.
    ///
    /// Left is applied before right, so holding both walks right.
    pub fn handle_input(&mut self, input: &FrameInput) {
        let prev_facing = self.facing;

        self.is_crouching = input.down && self.on_ground;

        self.vel.x = 0.0;
        if input.left {
            self.vel.x = -PLAYER_SPEED;
            self.facing = Facing::Left;
        }
        if input.right {
            self.vel.x = PLAYER_SPEED;
            self.facing = Facing::Right;
        }

        if self.facing != prev_facing {
            self.turning = true;
            self.turn_timer = TURN_DURATION;
        }
    }

    /// Start a jump if standing. Returns true if the jump fired.
    pub fn jump(&mut self) -> bool {
        if self.on_ground && !self.is_crouching {
            self.vel.y = JUMP_STRENGTH;
            self.on_ground = false;
            return true;
        }
        false
    }

    /// Accelerate downward, capped at terminal velocity
    pub fn apply_gravity(&mut self) {
        self.vel.y = (self.vel.y + GRAVITY).min(TERMINAL_VELOCITY);
    }

    /// Move by the current velocity, one axis at a time, resolving against
    /// platforms and blocks. Blocks struck from below are hit before the
    /// player is pushed out of them.
    ///
    /// Returns the indices of blocks that were used up by this move.
    pub fn move_and_collide(&mut self, platforms: &[Rect], blocks: &mut [Block]) -> Vec<usize> {
        let solids = colliders(platforms, blocks);

        self.rect.x += self.vel.x;
        resolve_horizontal(&mut self.rect, self.vel.x, &solids);

        self.rect.y += self.vel.y;
        self.on_ground = false;
        let mut used_up = Vec::new();
        let contact = resolve_vertical(&mut self.rect, self.vel.y, &solids, |index| {
            if blocks.get_mut(index).is_some_and(Block::hit) {
                used_up.push(index);
            }
        });
        if contact.landed || contact.bumped_head {
            self.vel.y = 0.0;
        }
        self.on_ground = contact.landed;

        used_up
    }

    /// Advance time-based animation (blink, walk cycle, turn, crouch)
    pub fn update_animation(&mut self, dt: f32, rng: &mut impl Rng) {
        self.blink_timer -= dt;
        if self.blink_timer <= 0.0 {
            self.blink_duration = BLINK_DURATION;
            self.blink_timer = next_blink_interval(rng);
        }
        if self.blink_duration > 0.0 {
            self.blink_duration -= dt;
        }

        if self.vel.x != 0.0 && self.on_ground {
            self.walk_timer += dt * WALK_SPEED;
        } else {
            self.walk_timer = 0.0;
        }

        if self.turning {
            self.turn_timer -= dt;
            if self.turn_timer <= 0.0 {
                self.turning = false;
            }
        }

        let target = if self.is_crouching { 1.0 } else { 0.0 };
        let step = dt * CROUCH_RATE;
        self.crouch_progress = if target > self.crouch_progress {
            (self.crouch_progress + step).min(1.0)
        } else {
            (self.crouch_progress - step).max(0.0)
        };
    }

    /// Eyes are open unless a blink is in progress
    #[inline]
    pub fn eyes_open(&self) -> bool {
        self.blink_duration <= 0.0
    }

    /// Progress through the flip animation, 0 at the start and 1 at the end
    pub fn turn_progress(&self) -> Option<f32> {
        self.turning
            .then(|| (1.0 - self.turn_timer / TURN_DURATION).clamp(0.0, 1.0))
    }
}

fn next_blink_interval(rng: &mut impl Rng) -> f32 {
    rng.random_range(BLINK_INTERVAL_MIN..BLINK_INTERVAL_MAX)
}
