//! Horizontal follow camera

use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_SMOOTHING, SCREEN_W};

/// Scroll position of the view's left edge in world space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    /// Ease toward centering `focus_x` on screen, covering a fixed fraction
    /// of the remaining distance each frame
    pub fn follow(&mut self, focus_x: f32) {
        let target = focus_x - SCREEN_W / 2.0;
        self.x += (target - self.x) * CAMERA_SMOOTHING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_moves_a_tenth_of_the_way() {
        let mut camera = Camera::default();
        camera.follow(SCREEN_W / 2.0 + 100.0);
        assert!((camera.x - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_follow_converges_without_overshoot() {
        let mut camera = Camera::default();
        let focus = 1500.0;
        let target = focus - SCREEN_W / 2.0;
        for _ in 0..200 {
            camera.follow(focus);
            assert!(camera.x <= target);
        }
        assert!((camera.x - target).abs() < 0.01);
    }

    #[test]
    fn test_follow_scrolls_left_of_origin() {
        // Near the level start the camera happily looks past x = 0
        let mut camera = Camera::default();
        camera.follow(125.0);
        assert!(camera.x < 0.0);
    }
}
