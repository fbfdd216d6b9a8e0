//! Purin Platformer - a side-scrolling platformer with a procedural hero
//!
//! Core modules:
//! - `game`: World plus settings, stepped once per frame
//! - `sim`: Simulation (physics, collisions, enemy AI, world state)
//! - `scene`: Pure composition of the world into draw commands
//! - `renderer`: Tessellation and the WebGPU rendering pipeline
//! - `platform`: Browser/native input and frame timing
//! - `settings`: Player preferences

pub mod game;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use game::{Frame, Game};
pub use settings::{QualityPreset, Settings};
pub use sim::{FrameInput, GameEvent, World};

/// Game configuration constants
///
/// Physics values are applied once per frame; animation values are
/// per second and scaled by the frame's elapsed time.
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_W: f32 = 1024.0;
    pub const SCREEN_H: f32 = 576.0;

    /// Default target frame rate
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta fed into animation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 1.0;
    /// Terminal falling speed (pixels/frame)
    pub const TERMINAL_VELOCITY: f32 = 20.0;
    /// Horizontal walking speed (pixels/frame)
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Upward jump impulse (pixels/frame, negative is up)
    pub const JUMP_STRENGTH: f32 = -18.0;
    /// Bounce after stomping an enemy (half the jump impulse)
    pub const STOMP_BOUNCE: f32 = -9.0;

    /// Player dimensions
    pub const PLAYER_W: f32 = 50.0;
    pub const PLAYER_H: f32 = 60.0;

    /// Walk cycle phase speed (radians/sec)
    pub const WALK_SPEED: f32 = 10.0;
    /// Duration of the facing flip animation (seconds)
    pub const TURN_DURATION: f32 = 0.2;
    /// How long the eyes stay closed (seconds)
    pub const BLINK_DURATION: f32 = 0.15;
    /// Range of the random wait between blinks (seconds)
    pub const BLINK_INTERVAL_MIN: f32 = 2.0;
    pub const BLINK_INTERVAL_MAX: f32 = 5.0;
    /// Crouch easing rate (progress/sec)
    pub const CROUCH_RATE: f32 = 8.0;

    /// Block defaults
    pub const BLOCK_SIZE: f32 = 40.0;
    /// Upward kick given to a block when struck (pixels/frame)
    pub const BLOCK_BOUNCE_VELOCITY: f32 = -5.0;
    /// Spring pull back toward rest (pixels/frame²)
    pub const BLOCK_BOUNCE_GRAVITY: f32 = 0.8;

    /// Coin spawn offset above the block top
    pub const COIN_SPAWN_OFFSET: f32 = 10.0;
    /// Coin launch velocity (pixels/frame)
    pub const COIN_LAUNCH_VELOCITY: f32 = -6.0;
    /// Coin gravity (pixels/frame²)
    pub const COIN_GRAVITY: f32 = 0.5;
    /// Coin lifetime (seconds)
    pub const COIN_LIFETIME: f32 = 0.8;
    pub const COIN_RADIUS: f32 = 8.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Fraction of the remaining distance the camera covers each frame
    pub const CAMERA_SMOOTHING: f32 = 0.1;

    /// Background parallax factor relative to the foreground
    pub const PARALLAX: f32 = 0.5;
    /// Width of the decorated world
    pub const WORLD_WIDTH: f32 = 3000.0;
}
