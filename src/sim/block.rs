//! Interactive "hit" blocks
//!
//! A block starts fresh. Struck from below it becomes used (one way), kicks
//! upward, springs back to rest and releases a single coin.

use serde::{Deserialize, Serialize};

use super::geometry::{GeometryError, Rect};
use crate::consts::*;

/// A coin popping out of a struck block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// World-space vertical position of the coin center
    pub y: f32,
    /// Vertical velocity (pixels/frame)
    pub vy: f32,
    /// Seconds since spawn
    pub time: f32,
}

impl Coin {
    fn spawn_above(block: &Rect) -> Self {
        Self {
            y: block.y - COIN_SPAWN_OFFSET,
            vy: COIN_LAUNCH_VELOCITY,
            time: 0.0,
        }
    }

    fn expired(&self) -> bool {
        self.time >= COIN_LIFETIME
    }
}

/// A block entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    /// Set once the block has been struck; never resets
    pub used: bool,
    /// Visual offset from rest (always <= 0, up is negative)
    pub bounce_offset: f32,
    pub bounce_velocity: f32,
    pub coins: Vec<Coin>,
}

impl Block {
    /// Standard 40x40 block
    pub fn new(x: f32, y: f32) -> Result<Self, GeometryError> {
        Self::with_size(x, y, BLOCK_SIZE, BLOCK_SIZE)
    }

    pub fn with_size(x: f32, y: f32, w: f32, h: f32) -> Result<Self, GeometryError> {
        Ok(Self {
            rect: Rect::checked(x, y, w, h)?,
            used: false,
            bounce_offset: 0.0,
            bounce_velocity: 0.0,
            coins: Vec::new(),
        })
    }

    /// React to being struck from below.
    ///
    /// Returns true if this hit used up the block; hits on a used block
    /// change nothing.
    pub fn hit(&mut self) -> bool {
        if self.used {
            return false;
        }
        self.used = true;
        self.bounce_velocity = BLOCK_BOUNCE_VELOCITY;
        self.coins.push(Coin::spawn_above(&self.rect));
        true
    }

    /// Advance bounce and coins by one frame
    pub fn update(&mut self, dt: f32) {
        self.bounce_offset += self.bounce_velocity;
        self.bounce_velocity += BLOCK_BOUNCE_GRAVITY;
        if self.bounce_offset > 0.0 {
            self.bounce_offset = 0.0;
            self.bounce_velocity = 0.0;
        }

        for coin in &mut self.coins {
            coin.y += coin.vy;
            coin.vy += COIN_GRAVITY;
            coin.time += dt;
        }
        self.coins.retain(|c| !c.expired());
    }

    /// True while the bounce animation is still running
    pub fn is_bouncing(&self) -> bool {
        self.bounce_offset != 0.0 || self.bounce_velocity != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_fresh_block_hit_from_below() {
        let mut block = Block::new(600.0, 276.0).unwrap();
        assert!(block.hit());
        block.update(DT);

        assert!(block.used);
        assert_eq!(block.coins.len(), 1);
        assert!(block.bounce_offset < 0.0);
        // Coin starts just above the block and has already moved up once
        assert_eq!(block.coins[0].y, 276.0 - COIN_SPAWN_OFFSET + COIN_LAUNCH_VELOCITY);
    }

    #[test]
    fn test_hit_fires_once() {
        let mut block = Block::new(0.0, 0.0).unwrap();
        assert!(block.hit());
        for _ in 0..5 {
            assert!(!block.hit());
        }
        assert_eq!(block.coins.len(), 1);
        assert_eq!(block.bounce_velocity, BLOCK_BOUNCE_VELOCITY);
    }

    #[test]
    fn test_second_hit_mid_bounce_is_noop() {
        let mut block = Block::new(0.0, 0.0).unwrap();
        block.hit();
        block.update(DT);
        let velocity = block.bounce_velocity;
        assert!(!block.hit());
        assert_eq!(block.bounce_velocity, velocity);
    }

    #[test]
    fn test_bounce_settles_to_rest() {
        let mut block = Block::new(0.0, 0.0).unwrap();
        block.hit();
        let mut frames = 0;
        while block.is_bouncing() {
            block.update(DT);
            assert!(block.bounce_offset <= 0.0);
            frames += 1;
            assert!(frames < 60, "bounce never settled");
        }
        assert_eq!(block.bounce_offset, 0.0);
        assert_eq!(block.bounce_velocity, 0.0);
    }

    #[test]
    fn test_coin_expires_after_lifetime() {
        let mut block = Block::new(0.0, 0.0).unwrap();
        block.hit();

        // 0.7s in: still flying
        for _ in 0..7 {
            block.update(0.1);
        }
        assert_eq!(block.coins.len(), 1);

        // Crossing 0.8s removes it
        block.update(0.1);
        block.update(0.01);
        assert!(block.coins.is_empty());
    }

    #[test]
    fn test_idle_block_update_is_stable() {
        let mut block = Block::new(10.0, 10.0).unwrap();
        block.update(DT);
        assert!(!block.used);
        assert_eq!(block.bounce_offset, 0.0);
        assert!(block.coins.is_empty());
    }

    #[test]
    fn test_rejects_degenerate_block() {
        assert!(Block::with_size(0.0, 0.0, 0.0, 40.0).is_err());
    }

    proptest! {
        #[test]
        fn bounce_offset_never_positive(frames in 1usize..200, hit_at in 0usize..50, dt in 0.001f32..0.1) {
            let mut block = Block::new(0.0, 0.0).unwrap();
            for frame in 0..frames {
                if frame == hit_at {
                    block.hit();
                }
                block.update(dt);
                prop_assert!(block.bounce_offset <= 0.0);
            }
        }

        #[test]
        fn coin_count_matches_successful_hits(hits in 0usize..10) {
            let mut block = Block::new(0.0, 0.0).unwrap();
            let fired = (0..hits).filter(|_| block.hit()).count();
            prop_assert_eq!(block.coins.len(), fired);
            prop_assert!(fired <= 1);
        }
    }
}
