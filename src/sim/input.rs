//! Per-frame input snapshot

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Down/crouch held
    pub down: bool,
    /// Jump pressed this frame (edge, not held)
    pub jump_pressed: bool,
    /// Quit requested (Escape or window close)
    pub quit: bool,
}

impl FrameInput {
    /// Nothing held, nothing pressed
    pub const IDLE: Self = Self {
        left: false,
        right: false,
        down: false,
        jump_pressed: false,
        quit: false,
    };
}
