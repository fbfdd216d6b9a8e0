//! Shape generation for 2D primitives
//!
//! Turns a `DrawList` into a flat triangle list in screen pixels. Outlines
//! grow inward from a shape's bounds, so a stroked shape covers exactly
//! the area of the filled one.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::vertex::Vertex;
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::scene::{Color, DrawCommand, DrawList, Paint, Sprite};
use crate::sim::Rect;

/// Fewest segments a full circle is ever cut into
const MIN_CIRCLE_SEGMENTS: u32 = 8;

/// Tessellate a whole draw list, painter's order preserved
pub fn tessellate(list: &DrawList, circle_segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.len() * 64);
    append(&mut vertices, list, circle_segments.max(MIN_CIRCLE_SEGMENTS));
    vertices
}

fn append(out: &mut Vec<Vertex>, list: &DrawList, segments: u32) {
    for command in &list.commands {
        match *command {
            DrawCommand::Clear(color) => {
                out.extend(rect(&Rect::new(0.0, 0.0, SCREEN_W, SCREEN_H), color));
            }
            DrawCommand::Rect {
                rect: ref r,
                radius,
                paint,
                color,
            } => out.extend(match paint {
                Paint::Fill => rounded_rect(r, radius, color, segments),
                Paint::Stroke(width) => rounded_rect_outline(r, radius, width, color, segments),
            }),
            DrawCommand::Ellipse {
                ref bounds,
                paint,
                color,
            } => {
                let radii = Vec2::new(bounds.w, bounds.h) * 0.5;
                out.extend(match paint {
                    Paint::Fill => ellipse(bounds.center(), radii, color, segments),
                    Paint::Stroke(width) => ellipse_ring(bounds.center(), radii, width, color, segments),
                });
            }
            DrawCommand::Circle {
                center,
                radius,
                paint,
                color,
            } => out.extend(match paint {
                Paint::Fill => circle(center, radius, color, segments),
                Paint::Stroke(width) => ring(center, radius - width, radius, color, segments),
            }),
            DrawCommand::Arc {
                ref bounds,
                start,
                end,
                width,
                color,
            } => out.extend(arc(bounds, start, end, width, color, segments)),
            DrawCommand::Triangle { points, color } => {
                out.extend(points.iter().map(|&p| Vertex::at(p, color)));
            }
            DrawCommand::Sprite(ref sprite) => out.extend(sprite_vertices(sprite, segments)),
        }
    }
}

/// Tessellate a sprite's layer, then mirror, squash and place it
pub fn sprite_vertices(sprite: &Sprite, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    append(&mut vertices, &sprite.layer, segments);
    for v in &mut vertices {
        v.position = sprite.transform(v.pos()).into();
    }
    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Rect, color: Color) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled rectangle with rounded corners
pub fn rounded_rect(r: &Rect, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let radius = corner_radius(r, radius);
    if radius <= 0.0 {
        return rect(r, color);
    }
    let rim = rounded_rect_rim(r, radius, corner_segments(segments));
    fan(r.center(), &rim, color)
}

/// Generate vertices for the outline band of a (rounded) rectangle
pub fn rounded_rect_outline(
    r: &Rect,
    radius: f32,
    width: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let radius = corner_radius(r, radius);
    let steps = if radius > 0.0 {
        corner_segments(segments)
    } else {
        0
    };
    let inner = r.inset(width);
    let outer_rim = rounded_rect_rim(r, radius, steps);
    let inner_rim = rounded_rect_rim(&inner, (radius - width).max(0.0), steps);
    band(&outer_rim, &inner_rim, color)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let outer = ellipse_rim(center, Vec2::splat(outer_radius), 0.0, TAU, segments);
    let inner = ellipse_rim(center, Vec2::splat(inner_radius.max(0.0)), 0.0, TAU, segments);
    band(&outer, &inner, color)
}

/// Generate vertices for a filled ellipse with the given half-extents
pub fn ellipse(center: Vec2, radii: Vec2, color: Color, segments: u32) -> Vec<Vertex> {
    fan(center, &ellipse_rim(center, radii, 0.0, TAU, segments), color)
}

/// Generate vertices for an elliptical outline `width` pixels thick
pub fn ellipse_ring(center: Vec2, radii: Vec2, width: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let inner_radii = (radii - Vec2::splat(width)).max(Vec2::ZERO);
    let outer = ellipse_rim(center, radii, 0.0, TAU, segments);
    let inner = ellipse_rim(center, inner_radii, 0.0, TAU, segments);
    band(&outer, &inner, color)
}

/// Generate vertices for an elliptical arc band inscribed in `bounds`.
///
/// Angles run counterclockwise on screen; an end before the start wraps
/// once around.
pub fn arc(bounds: &Rect, start: f32, end: f32, width: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let end = if end < start { end + TAU } else { end };
    let span = end - start;
    let steps = ((span / TAU * segments as f32).ceil() as u32).max(4);

    let radii = Vec2::new(bounds.w, bounds.h) * 0.5;
    let inner_radii = (radii - Vec2::splat(width)).max(Vec2::ZERO);
    let outer = ellipse_rim(bounds.center(), radii, start, end, steps);
    let inner = ellipse_rim(bounds.center(), inner_radii, start, end, steps);
    band(&outer, &inner, color)
}

fn corner_radius(r: &Rect, radius: f32) -> f32 {
    radius.min(r.w * 0.5).min(r.h * 0.5).max(0.0)
}

fn corner_segments(segments: u32) -> u32 {
    (segments / 4).max(2)
}

/// `steps + 1` points from `start` to `end` on an ellipse, y flipped so
/// positive angles turn counterclockwise on screen
fn ellipse_rim(center: Vec2, radii: Vec2, start: f32, end: f32, steps: u32) -> Vec<Vec2> {
    (0..=steps)
        .map(|i| {
            let theta = start + (end - start) * i as f32 / steps as f32;
            Vec2::new(
                center.x + radii.x * theta.cos(),
                center.y - radii.y * theta.sin(),
            )
        })
        .collect()
}

/// Closed rim of a rounded rectangle, clockwise from the top edge
fn rounded_rect_rim(r: &Rect, radius: f32, steps: u32) -> Vec<Vec2> {
    let corners = [
        (Vec2::new(r.right() - radius, r.top() + radius), -FRAC_PI_2),
        (Vec2::new(r.right() - radius, r.bottom() - radius), 0.0),
        (Vec2::new(r.left() + radius, r.bottom() - radius), FRAC_PI_2),
        (Vec2::new(r.left() + radius, r.top() + radius), PI),
    ];

    let mut rim = Vec::with_capacity(4 * (steps as usize + 1) + 1);
    for (center, from) in corners {
        for i in 0..=steps {
            let theta = if steps == 0 {
                from
            } else {
                from + FRAC_PI_2 * i as f32 / steps as f32
            };
            rim.push(center + radius * Vec2::new(theta.cos(), theta.sin()));
        }
    }
    if let Some(&first) = rim.first() {
        rim.push(first);
    }
    rim
}

/// Triangle fan from `center` over consecutive rim points
fn fan(center: Vec2, rim: &[Vec2], color: Color) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(rim.len().saturating_sub(1) * 3);
    for pair in rim.windows(2) {
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(pair[0], color));
        vertices.push(Vertex::at(pair[1], color));
    }
    vertices
}

/// Quad strip between two rims of equal length
fn band(outer: &[Vec2], inner: &[Vec2], color: Color) -> Vec<Vertex> {
    debug_assert_eq!(outer.len(), inner.len());
    let mut vertices = Vec::with_capacity(outer.len().saturating_sub(1) * 6);
    for i in 0..outer.len().min(inner.len()).saturating_sub(1) {
        let (o1, o2, i1, i2) = (outer[i], outer[i + 1], inner[i], inner[i + 1]);

        // Two triangles per segment
        vertices.push(Vertex::at(i1, color));
        vertices.push(Vertex::at(o1, color));
        vertices.push(Vertex::at(i2, color));

        vertices.push(Vertex::at(i2, color));
        vertices.push(Vertex::at(o1, color));
        vertices.push(Vertex::at(o2, color));
    }
    vertices
}
