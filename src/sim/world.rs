//! World state: every entity in the running level

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::block::Block;
use super::camera::Camera;
use super::enemy::Enemy;
use super::geometry::Rect;
use super::level::{Level, LevelError};
use super::player::Player;

/// The running level. Owns all entities; nothing points back into it.
#[derive(Debug, Clone)]
pub struct World {
    /// Static geometry (never changes after load)
    pub platforms: Vec<Rect>,
    pub blocks: Vec<Block>,
    /// Active enemies; stomped enemies are removed
    pub enemies: Vec<Enemy>,
    pub player: Player,
    pub camera: Camera,
    /// Frames simulated so far
    pub frame: u64,
    /// Set once a quit request has been processed
    pub finished: bool,
    seed: u64,
    /// Drives cosmetic randomness (blink timing)
    pub(crate) rng: Pcg32,
}

impl World {
    /// Load the built-in level
    pub fn new(seed: u64) -> Result<Self, LevelError> {
        Self::from_level(Level::meadow()?, seed)
    }

    /// Start a world from an already-validated level
    pub fn from_level(level: Level, seed: u64) -> Result<Self, LevelError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (spawn_x, spawn_y) = level.player_spawn;
        let player = Player::new(spawn_x, spawn_y, &mut rng)?;

        log::debug!(
            "World loaded: {} platforms, {} blocks, {} enemies (seed {})",
            level.platforms.len(),
            level.blocks.len(),
            level.enemies.len(),
            seed
        );

        Ok(Self {
            platforms: level.platforms,
            blocks: level.blocks,
            enemies: level.enemies,
            player,
            camera: Camera::default(),
            frame: 0,
            finished: false,
            seed,
            rng,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of blocks that have been struck
    pub fn used_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.used).count()
    }
}
