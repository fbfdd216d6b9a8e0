//! Procedural pose of the player character
//!
//! A pose is a pure function of the player's animation state, so the
//! drawing code never touches timers directly.

use std::f32::consts::PI;

use crate::sim::{Facing, Player};

/// Narrowest the sprite gets mid-turn
pub const MIN_TURN_SCALE: f32 = 0.3;
/// Downward shift of the upper body at full crouch, applied in whole pixels
pub const CROUCH_DROP: f32 = 10.0;
/// Vertical squash of body and head at full crouch
pub const CROUCH_SQUASH: f32 = 0.15;
pub const LEG_SWING: f32 = 6.0;
pub const ARM_SWING: f32 = 8.0;
pub const HEAD_BOB: f32 = 2.0;

/// Offsets and scales derived from one player snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    /// Pixels the torso, arms and head sink while crouching
    pub crouch_offset: f32,
    /// Vertical scale applied to body and head
    pub crouch_scale: f32,
    /// Horizontal leg displacement; legs move in opposite directions
    pub leg_swing: f32,
    /// Vertical arm displacement; positive for the left arm, negated for the right
    pub arm_swing: f32,
    /// Vertical head bob while walking
    pub head_tilt: f32,
    pub eyes_open: bool,
    /// Mirror the sprite (facing left)
    pub flip_x: bool,
    /// Horizontal squash while turning
    pub scale_x: f32,
    /// +1 facing right, -1 facing left
    pub direction: f32,
}

impl PlayerPose {
    pub fn from_player(player: &Player, reduced_motion: bool) -> Self {
        let cp = player.crouch_progress;
        let walking = player.walk_timer > 0.0;
        let phase = player.walk_timer.sin();
        let step_phase = if walking { phase } else { 0.0 };

        let scale_x = match player.turn_progress() {
            Some(progress) if !reduced_motion => (progress * PI).cos().abs().max(MIN_TURN_SCALE),
            _ => 1.0,
        };

        Self {
            crouch_offset: (CROUCH_DROP * cp).trunc(),
            crouch_scale: 1.0 - CROUCH_SQUASH * cp,
            leg_swing: phase * LEG_SWING,
            arm_swing: phase * ARM_SWING,
            head_tilt: step_phase * HEAD_BOB,
            eyes_open: player.eyes_open(),
            flip_x: player.facing == Facing::Left,
            scale_x,
            direction: player.facing.sign(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TURN_DURATION;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn player() -> Player {
        let mut rng = Pcg32::seed_from_u64(3);
        Player::new(0.0, 0.0, &mut rng).unwrap()
    }

    #[test]
    fn test_idle_pose_is_neutral() {
        let pose = PlayerPose::from_player(&player(), false);
        assert_eq!(pose.crouch_offset, 0.0);
        assert_eq!(pose.crouch_scale, 1.0);
        assert_eq!(pose.leg_swing, 0.0);
        assert_eq!(pose.arm_swing, 0.0);
        assert_eq!(pose.head_tilt, 0.0);
        assert!(pose.eyes_open);
        assert!(!pose.flip_x);
        assert_eq!(pose.scale_x, 1.0);
        assert_eq!(pose.direction, 1.0);
    }

    #[test]
    fn test_full_crouch() {
        let mut p = player();
        p.crouch_progress = 1.0;
        let pose = PlayerPose::from_player(&p, false);
        assert_eq!(pose.crouch_offset, 10.0);
        assert!((pose.crouch_scale - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_crouch_drop_steps_in_whole_pixels() {
        let mut p = player();
        p.crouch_progress = 0.35;
        let pose = PlayerPose::from_player(&p, false);
        assert_eq!(pose.crouch_offset, 3.0);
        assert!((pose.crouch_scale - (1.0 - CROUCH_SQUASH * 0.35)).abs() < 1e-6);

        p.crouch_progress = 0.09;
        assert_eq!(PlayerPose::from_player(&p, false).crouch_offset, 0.0);
    }

    #[test]
    fn test_walk_cycle_drives_limbs_and_head() {
        let mut p = player();
        p.walk_timer = PI / 2.0;
        let pose = PlayerPose::from_player(&p, false);
        assert!((pose.leg_swing - 6.0).abs() < 1e-5);
        assert!((pose.arm_swing - 8.0).abs() < 1e-5);
        assert!((pose.head_tilt - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_turn_squash_bottoms_out_mid_turn() {
        let mut p = player();
        p.facing = Facing::Left;
        p.turning = true;
        p.turn_timer = TURN_DURATION / 2.0;
        let pose = PlayerPose::from_player(&p, false);
        assert!(pose.flip_x);
        assert_eq!(pose.direction, -1.0);
        assert_eq!(pose.scale_x, MIN_TURN_SCALE);

        p.turn_timer = TURN_DURATION;
        let start = PlayerPose::from_player(&p, false);
        assert!((start.scale_x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reduced_motion_skips_squash() {
        let mut p = player();
        p.turning = true;
        p.turn_timer = TURN_DURATION / 2.0;
        assert_eq!(PlayerPose::from_player(&p, true).scale_x, 1.0);
    }

    #[test]
    fn test_blinking_closes_eyes() {
        let mut p = player();
        p.blink_duration = 0.1;
        assert!(!PlayerPose::from_player(&p, false).eyes_open);
    }
}
