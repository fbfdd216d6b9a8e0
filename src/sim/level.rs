//! The built-in level layout
//!
//! Geometry is a fixed table; `Level::build` validates it into entities.

use thiserror::Error;

use super::block::Block;
use super::enemy::Enemy;
use super::geometry::{GeometryError, Rect};
use crate::consts::SCREEN_H;

/// A layout entry that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LevelError {
    #[error("platform {index}: {source}")]
    Platform { index: usize, source: GeometryError },
    #[error("block {index}: {source}")]
    Block { index: usize, source: GeometryError },
    #[error("enemy {index}: {source}")]
    Enemy { index: usize, source: GeometryError },
    #[error("player spawn: {0}")]
    Player(#[from] GeometryError),
}

/// Raw placement data for a level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    /// Player spawn (top-left)
    pub player_spawn: (f32, f32),
    /// Static platforms as (x, y, w, h)
    pub platforms: Vec<(f32, f32, f32, f32)>,
    /// Block top-left corners
    pub blocks: Vec<(f32, f32)>,
    /// Enemy top-left corners
    pub enemies: Vec<(f32, f32)>,
}

impl Default for LevelLayout {
    /// The meadow: a long ground strip, four floating ledges, a row of
    /// three blocks and three walkers
    fn default() -> Self {
        let h = SCREEN_H;
        Self {
            player_spawn: (100.0, 100.0),
            platforms: vec![
                (0.0, h - 40.0, 3000.0, 40.0),
                (400.0, h - 150.0, 200.0, 30.0),
                (800.0, h - 250.0, 200.0, 30.0),
                (1400.0, h - 200.0, 200.0, 30.0),
                (2000.0, h - 300.0, 200.0, 30.0),
            ],
            blocks: vec![(600.0, h - 300.0), (620.0, h - 300.0), (640.0, h - 300.0)],
            enemies: vec![(500.0, h - 80.0), (1000.0, h - 290.0), (1800.0, h - 240.0)],
        }
    }
}

/// Validated level contents
#[derive(Debug, Clone)]
pub struct Level {
    pub player_spawn: (f32, f32),
    pub platforms: Vec<Rect>,
    pub blocks: Vec<Block>,
    pub enemies: Vec<Enemy>,
}

impl Level {
    /// Validate a layout into entities
    pub fn build(layout: &LevelLayout) -> Result<Self, LevelError> {
        let platforms = layout
            .platforms
            .iter()
            .enumerate()
            .map(|(index, &(x, y, w, h))| {
                Rect::checked(x, y, w, h).map_err(|source| LevelError::Platform { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let blocks = layout
            .blocks
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| {
                Block::new(x, y).map_err(|source| LevelError::Block { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let enemies = layout
            .enemies
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| {
                Enemy::new(x, y).map_err(|source| LevelError::Enemy { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            player_spawn: layout.player_spawn,
            platforms,
            blocks,
            enemies,
        })
    }

    /// The built-in level
    pub fn meadow() -> Result<Self, LevelError> {
        Self::build(&LevelLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meadow_builds() {
        let level = Level::meadow().unwrap();
        assert_eq!(level.platforms.len(), 5);
        assert_eq!(level.blocks.len(), 3);
        assert_eq!(level.enemies.len(), 3);
        assert_eq!(level.platforms[0].bottom(), SCREEN_H);
        assert!(level.blocks.iter().all(|b| !b.used));
    }

    #[test]
    fn test_degenerate_platform_is_reported() {
        let mut layout = LevelLayout::default();
        layout.platforms.push((0.0, 0.0, 100.0, 0.0));
        let err = Level::build(&layout).unwrap_err();
        assert_eq!(
            err,
            LevelError::Platform {
                index: 5,
                source: GeometryError::NonPositiveSize { w: 100.0, h: 0.0 }
            }
        );
        assert_eq!(
            err.to_string(),
            "platform 5: rectangle size must be positive, got 100x0"
        );
    }

    #[test]
    fn test_walkers_spawn_standing_on_surfaces() {
        let level = Level::meadow().unwrap();
        assert_eq!(level.enemies[0].rect.bottom(), level.platforms[0].top());
        assert_eq!(level.enemies[1].rect.bottom(), level.platforms[2].top());
        assert_eq!(level.enemies[2].rect.bottom(), level.platforms[3].top());
    }
}
