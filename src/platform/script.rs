//! Scripted key presses for headless runs
//!
//! A script is a list of `(frame, press)` pairs replayed through a
//! `KeyboardState`, so a scripted run goes through the same key handling
//! as a browser session.

use super::input::KeyboardState;

/// A key event at a scripted frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    Down(&'static str),
    Up(&'static str),
}

/// Demo run through the meadow, timed against its layout at one step per
/// frame:
///
/// - frame 35: jump from the ground, clear the first ledge's side and land on
///   it at frame 61
/// - frame 77: jump off the ledge's right end and head-butt the first block
///   of the row at frame 80
/// - frame 99: back on the ground past the ledge, turn around
/// - frame 120: jump beside the first walker, bump under the ledge and drop
///   onto the walker at frame 122
/// - crouch for a while, then walk right along the ground
pub const DEMO: &[(u64, Press)] = &[
    (0, Press::Down("ArrowRight")),
    (35, Press::Down(" ")),
    (36, Press::Up(" ")),
    (77, Press::Down("ArrowUp")),
    (78, Press::Up("ArrowUp")),
    (99, Press::Up("ArrowRight")),
    (99, Press::Down("a")),
    (120, Press::Down(" ")),
    (121, Press::Up(" ")),
    (140, Press::Up("a")),
    (150, Press::Down("s")),
    (180, Press::Up("s")),
    (200, Press::Down("d")),
];

/// Feed every press scheduled for `frame` into `keyboard`, in script order
pub fn apply(script: &[(u64, Press)], frame: u64, keyboard: &mut KeyboardState) {
    for &(_, press) in script.iter().filter(|(at, _)| *at == frame) {
        match press {
            Press::Down(key) => keyboard.key_down(key),
            Press::Up(key) => keyboard.key_up(key),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_is_in_frame_order() {
        assert!(DEMO.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn test_apply_only_touches_its_frame() {
        let mut kb = KeyboardState::new();
        apply(DEMO, 35, &mut kb);
        let input = kb.snapshot();
        assert!(input.jump_pressed);
        // Right was pressed at frame 0, which was not replayed
        assert!(!input.right);
    }

    #[test]
    fn test_same_frame_presses_apply_in_order() {
        let mut kb = KeyboardState::new();
        apply(DEMO, 0, &mut kb);
        apply(DEMO, 99, &mut kb);
        let input = kb.snapshot();
        assert!(input.left);
        assert!(!input.right);
    }
}
