//! Simulation module
//!
//! All gameplay logic lives here. This module must stay display-free:
//! - Physics integrates in fixed per-frame steps
//! - Seeded RNG only (cosmetic timing)
//! - Stable iteration order (platforms, then blocks, by index)
//! - No rendering or platform dependencies

pub mod block;
pub mod camera;
pub mod collision;
pub mod enemy;
pub mod geometry;
pub mod input;
pub mod level;
pub mod player;
pub mod tick;
pub mod world;

pub use block::{Block, Coin};
pub use camera::Camera;
pub use collision::{Collider, ColliderKind, colliders, resolve_horizontal, resolve_vertical};
pub use enemy::Enemy;
pub use geometry::{GeometryError, Rect};
pub use input::FrameInput;
pub use level::{Level, LevelError, LevelLayout};
pub use player::{Facing, Player};
pub use tick::{GameEvent, tick};
pub use world::World;
