//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names to game keys, edge-triggered jump)
//! - Time/ticks (frame rate limiting)
//! - Scripted key presses for headless runs
//!
//! Settings storage lives with `Settings` itself.

pub mod input;
pub mod script;
pub mod time;

pub use input::{Key, KeyboardState};
pub use time::FrameClock;
#[cfg(not(target_arch = "wasm32"))]
pub use time::FrameLimiter;
