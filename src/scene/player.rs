//! Procedural player figure
//!
//! The figure is drawn into a sprite layer padded by 30px on every side
//! so the ears and arms can stick out past the collision box.

use glam::Vec2;

use super::draw::{DrawList, Paint, Sprite, colors};
use super::pose::PlayerPose;
use crate::sim::{Player, Rect};

/// Padding between the sprite layer edge and the collision box
pub const SPRITE_PAD: f32 = 30.0;

const OUTLINE_W: f32 = 2.0;
const EYE_W: f32 = 6.0;
const EYE_OPEN_H: f32 = 8.0;
const EYE_CLOSED_H: f32 = 2.0;

/// Build the player's sprite for the current frame
pub fn draw_player(player: &Player, camera_x: f32, reduced_motion: bool) -> Sprite {
    let pose = PlayerPose::from_player(player, reduced_motion);
    let (w, h) = (player.rect.w, player.rect.h);

    Sprite {
        origin: Vec2::new(
            player.rect.x - camera_x - SPRITE_PAD,
            player.rect.y - SPRITE_PAD,
        ),
        size: Vec2::new(w + 2.0 * SPRITE_PAD, h + 2.0 * SPRITE_PAD),
        flip_x: pose.flip_x,
        scale_x: pose.scale_x,
        layer: figure(&pose, w, h),
    }
}

/// Layer-space commands for one pose, back to front
fn figure(pose: &PlayerPose, w: f32, h: f32) -> DrawList {
    let mut list = DrawList::new();
    let (x, y) = (SPRITE_PAD, SPRITE_PAD);
    let co = pose.crouch_offset;
    let cs = pose.crouch_scale;
    let head_y = y + co + pose.head_tilt;

    // Legs
    let swing = pose.leg_swing * pose.direction;
    let leg_y = y + h - 15.0 - co;
    list.rect(Rect::new(x + 10.0 + swing, leg_y, 10.0, 15.0), Paint::Fill, colors::SHOE);
    list.rect(Rect::new(x + w - 20.0 - swing, leg_y, 10.0, 15.0), Paint::Fill, colors::SHOE);

    // Body
    let body = Rect::new(x + 5.0, y + 20.0 + co, w - 10.0, (h - 25.0) * cs);
    list.outlined_rect(body, 10.0, colors::SKIN, colors::OUTLINE, OUTLINE_W);

    // Arms
    let left_arm = Rect::new(x - 5.0, y + 30.0 + pose.arm_swing + co, 8.0, 15.0);
    let right_arm = Rect::new(x + w - 3.0, y + 30.0 - pose.arm_swing + co, 8.0, 15.0);
    for arm in [left_arm, right_arm] {
        list.outlined_rect(arm, 5.0, colors::SKIN, colors::OUTLINE, OUTLINE_W);
    }

    // Head and hat
    let head = Rect::new(x - 5.0, head_y - 5.0, w + 10.0, 35.0 * cs);
    list.outlined_ellipse(head, colors::SKIN, colors::OUTLINE, OUTLINE_W);
    let hat = Rect::new(x + 5.0, head_y - 15.0, w, 20.0);
    list.outlined_ellipse(hat, colors::HAT, colors::OUTLINE, OUTLINE_W);

    // Ears
    let ear_y = head_y + 5.0;
    for ear_x in [x - 25.0, x + w] {
        let ear = Rect::new(ear_x, ear_y, 30.0, 20.0);
        list.outlined_ellipse(ear, colors::SKIN, colors::OUTLINE, OUTLINE_W);
    }

    // Eyes
    let eye_h = if pose.eyes_open { EYE_OPEN_H } else { EYE_CLOSED_H };
    for eye_x in [x + (w * 0.35).trunc(), x + (w * 0.65).trunc()] {
        let eye = Rect::new(eye_x, head_y + 10.0, EYE_W, eye_h);
        list.ellipse(eye, Paint::Fill, colors::OUTLINE);
        if pose.eyes_open {
            let shine = eye.center() - Vec2::ONE;
            list.circle(shine, 2.0, Paint::Fill, colors::EYE_SHINE);
        }
    }

    // Mouth
    let mouth = Rect::new(x + (w * 0.4).trunc(), head_y + 20.0, (w * 0.2).trunc(), 10.0);
    list.arc(
        mouth,
        200f32.to_radians(),
        340f32.to_radians(),
        OUTLINE_W,
        colors::OUTLINE,
    );

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TURN_DURATION;
    use crate::scene::draw::DrawCommand;
    use crate::sim::Facing;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn player_at(x: f32, y: f32) -> Player {
        let mut rng = Pcg32::seed_from_u64(9);
        Player::new(x, y, &mut rng).unwrap()
    }

    fn eye_heights(sprite: &Sprite) -> Vec<f32> {
        sprite
            .layer
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Ellipse { bounds, .. } if bounds.w == EYE_W => Some(bounds.h),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_sprite_placement() {
        let sprite = draw_player(&player_at(200.0, 300.0), 50.0, false);
        assert_eq!(sprite.origin, Vec2::new(120.0, 270.0));
        assert_eq!(sprite.size, Vec2::new(110.0, 120.0));
        assert!(!sprite.flip_x);
        assert_eq!(sprite.scale_x, 1.0);
    }

    #[test]
    fn test_figure_draw_order() {
        let sprite = draw_player(&player_at(0.0, 0.0), 0.0, false);
        let cmds = &sprite.layer.commands;
        // Legs first, mouth last
        assert!(matches!(cmds[0], DrawCommand::Rect { color, .. } if color == colors::SHOE));
        assert!(matches!(cmds.last(), Some(DrawCommand::Arc { .. })));
        // 2 legs, body x2, arms x4, head x2, hat x2, ears x4, eyes + shine x4, mouth
        assert_eq!(cmds.len(), 21);
    }

    #[test]
    fn test_blink_closes_eyes_and_drops_shine() {
        let mut p = player_at(0.0, 0.0);
        assert_eq!(eye_heights(&draw_player(&p, 0.0, false)), vec![8.0, 8.0]);

        p.blink_duration = 0.1;
        let sprite = draw_player(&p, 0.0, false);
        assert_eq!(eye_heights(&sprite), vec![2.0, 2.0]);
        assert!(
            !sprite
                .layer
                .commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Circle { .. }))
        );
    }

    #[test]
    fn test_facing_left_mirrors_and_turn_squashes() {
        let mut p = player_at(0.0, 0.0);
        p.facing = Facing::Left;
        p.turning = true;
        p.turn_timer = TURN_DURATION / 2.0;

        let sprite = draw_player(&p, 0.0, false);
        assert!(sprite.flip_x);
        assert_eq!(sprite.scale_x, 0.3);

        let calm = draw_player(&p, 0.0, true);
        assert!(calm.flip_x);
        assert_eq!(calm.scale_x, 1.0);
    }

    #[test]
    fn test_crouch_lowers_body() {
        let mut p = player_at(0.0, 0.0);
        let body_top = |p: &Player| match &draw_player(p, 0.0, false).layer.commands[2] {
            DrawCommand::Rect { rect, .. } => (rect.y, rect.h),
            other => panic!("unexpected {other:?}"),
        };
        let (standing_y, standing_h) = body_top(&p);
        p.crouch_progress = 1.0;
        let (crouched_y, crouched_h) = body_top(&p);
        assert_eq!(crouched_y - standing_y, 10.0);
        assert!(crouched_h < standing_h);
    }
}
