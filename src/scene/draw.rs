//! Backend-neutral draw commands
//!
//! Scene composition emits these; the renderer tessellates them. Coordinates
//! are screen pixels (top-left origin, y down) unless inside a `Sprite`,
//! whose commands are local to the sprite's top-left corner.

use glam::Vec2;

use crate::sim::Rect;

/// Linear RGBA color
pub type Color = [f32; 4];

/// Opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::{Color, rgb};

    pub const SKY: Color = rgb(135, 206, 235);
    pub const MOUNTAIN: Color = rgb(180, 220, 180);
    pub const CLOUD: Color = rgb(255, 255, 255);
    pub const TRUNK: Color = rgb(139, 69, 19);
    pub const CANOPY: Color = rgb(34, 139, 34);

    pub const PLATFORM: Color = rgb(205, 133, 63);
    /// Shared dark-brown outline
    pub const OUTLINE: Color = rgb(90, 60, 40);

    pub const BLOCK: Color = rgb(255, 204, 102);
    pub const BLOCK_USED: Color = rgb(200, 180, 150);
    pub const BLOCK_OUTLINE: Color = rgb(120, 80, 40);
    pub const COIN: Color = rgb(255, 215, 0);
    pub const COIN_OUTLINE: Color = rgb(180, 140, 0);

    pub const ENEMY: Color = rgb(160, 82, 45);

    pub const SKIN: Color = rgb(245, 222, 179);
    pub const SHOE: Color = rgb(100, 50, 30);
    pub const HAT: Color = rgb(90, 60, 40);
    pub const EYE_SHINE: Color = rgb(255, 255, 255);
}

/// How a closed shape is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill,
    /// Outline of the given width, drawn inside the shape's bounds
    Stroke(f32),
}

/// A single primitive draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear(Color),
    /// Rectangle, optionally with rounded corners
    Rect {
        rect: Rect,
        radius: f32,
        paint: Paint,
        color: Color,
    },
    /// Ellipse inscribed in `bounds`
    Ellipse {
        bounds: Rect,
        paint: Paint,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        color: Color,
    },
    /// Elliptical arc inscribed in `bounds`, angles in radians measured
    /// counterclockwise from +x as seen on screen
    Arc {
        bounds: Rect,
        start: f32,
        end: f32,
        width: f32,
        color: Color,
    },
    Triangle {
        points: [Vec2; 3],
        color: Color,
    },
    /// An offscreen layer blitted with an optional mirror and squash
    Sprite(Sprite),
}

/// A layer of commands drawn into a `size` box, then mirrored
/// horizontally (if `flip_x`), scaled horizontally by `scale_x` and blitted
/// with its top-left corner at `origin`
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub origin: Vec2,
    pub size: Vec2,
    pub flip_x: bool,
    pub scale_x: f32,
    pub layer: DrawList,
}

impl Sprite {
    /// Map a point from layer space to screen space
    pub fn transform(&self, local: Vec2) -> Vec2 {
        let x = if self.flip_x { self.size.x - local.x } else { local.x };
        self.origin + Vec2::new(x * self.scale_x, local.y)
    }
}

/// Ordered list of draw commands (painter's order)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self, color: Color) {
        self.push(DrawCommand::Clear(color));
    }

    pub fn rect(&mut self, rect: Rect, paint: Paint, color: Color) {
        self.rounded_rect(rect, 0.0, paint, color);
    }

    pub fn rounded_rect(&mut self, rect: Rect, radius: f32, paint: Paint, color: Color) {
        self.push(DrawCommand::Rect {
            rect,
            radius,
            paint,
            color,
        });
    }

    pub fn ellipse(&mut self, bounds: Rect, paint: Paint, color: Color) {
        self.push(DrawCommand::Ellipse {
            bounds,
            paint,
            color,
        });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, paint: Paint, color: Color) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            paint,
            color,
        });
    }

    pub fn arc(&mut self, bounds: Rect, start: f32, end: f32, width: f32, color: Color) {
        self.push(DrawCommand::Arc {
            bounds,
            start,
            end,
            width,
            color,
        });
    }

    pub fn triangle(&mut self, points: [Vec2; 3], color: Color) {
        self.push(DrawCommand::Triangle { points, color });
    }

    pub fn sprite(&mut self, sprite: Sprite) {
        self.push(DrawCommand::Sprite(sprite));
    }

    /// Filled shape with an outline on top
    pub fn outlined_rect(&mut self, rect: Rect, radius: f32, fill: Color, outline: Color, width: f32) {
        self.rounded_rect(rect, radius, Paint::Fill, fill);
        self.rounded_rect(rect, radius, Paint::Stroke(width), outline);
    }

    /// Filled ellipse with an outline on top
    pub fn outlined_ellipse(&mut self, bounds: Rect, fill: Color, outline: Color, width: f32) {
        self.ellipse(bounds, Paint::Fill, fill);
        self.ellipse(bounds, Paint::Stroke(width), outline);
    }
}
