//! Parallax scenery and static platforms

use glam::Vec2;

use super::draw::{DrawList, Paint, colors};
use crate::consts::{PARALLAX, SCREEN_H, WORLD_WIDTH};
use crate::settings::Settings;
use crate::sim::Rect;

const MOUNTAIN_SPACING: usize = 300;
const CLOUD_SPACING: usize = 400;
const TREE_SPACING: usize = 500;
const FIRST_TREE: usize = 100;

const PLATFORM_RADIUS: f32 = 10.0;
const PLATFORM_OUTLINE: f32 = 3.0;

/// Horizontal shift of the scenery layer for a camera position
#[inline]
pub fn parallax_offset(camera_x: f32) -> f32 {
    camera_x * PARALLAX
}

/// Mountains, clouds and trees at fixed world intervals, shifted by half
/// the camera offset
pub fn draw_background(list: &mut DrawList, camera_x: f32, settings: &Settings) {
    if !settings.show_scenery {
        return;
    }
    let p = parallax_offset(camera_x);
    let h = SCREEN_H;
    let span = WORLD_WIDTH as usize;

    for i in (0..span).step_by(MOUNTAIN_SPACING).map(|i| i as f32) {
        list.triangle(
            [
                Vec2::new(i - p, h - 40.0),
                Vec2::new(i + 150.0 - p, h - 200.0),
                Vec2::new(i + 300.0 - p, h - 40.0),
            ],
            colors::MOUNTAIN,
        );
    }

    if settings.clouds() {
        for i in (0..span).step_by(CLOUD_SPACING).map(|i| i as f32) {
            list.ellipse(Rect::new(i - p, 100.0, 100.0, 50.0), Paint::Fill, colors::CLOUD);
            list.ellipse(Rect::new(i + 30.0 - p, 80.0, 120.0, 60.0), Paint::Fill, colors::CLOUD);
            list.ellipse(Rect::new(i + 60.0 - p, 100.0, 100.0, 50.0), Paint::Fill, colors::CLOUD);
        }
    }

    if settings.trees() {
        for i in (FIRST_TREE..span).step_by(TREE_SPACING).map(|i| i as f32) {
            list.rect(Rect::new(i - p, h - 140.0, 20.0, 100.0), Paint::Fill, colors::TRUNK);
            list.circle(Vec2::new(i + 10.0 - p, h - 150.0), 50.0, Paint::Fill, colors::CANOPY);
        }
    }
}

/// Foreground platforms, shifted by the full camera offset
pub fn draw_platforms(list: &mut DrawList, platforms: &[Rect], camera_x: f32) {
    for platform in platforms {
        let r = platform.translated(-camera_x, 0.0);
        list.outlined_rect(r, PLATFORM_RADIUS, colors::PLATFORM, colors::OUTLINE, PLATFORM_OUTLINE);
    }
}
