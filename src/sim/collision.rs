//! Axis-separated collision resolution against the level
//!
//! The player moves one axis at a time. The horizontal pass clamps against
//! every intersecting obstacle, so the last one in iteration order wins. The
//! vertical pass stops at its first correction: one landing or one head bump
//! per move, and at most one block struck.

use super::block::Block;
use super::geometry::Rect;

/// What a collidable rectangle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderKind {
    /// Index into the level's static platforms
    Platform(usize),
    /// Index into the world's blocks
    Block(usize),
}

/// A solid rectangle tagged with its owner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub rect: Rect,
    pub kind: ColliderKind,
}

/// All solid geometry, platforms first then blocks
pub fn colliders(platforms: &[Rect], blocks: &[Block]) -> Vec<Collider> {
    let platform_colliders = platforms.iter().enumerate().map(|(i, rect)| Collider {
        rect: *rect,
        kind: ColliderKind::Platform(i),
    });
    let block_colliders = blocks.iter().enumerate().map(|(i, block)| Collider {
        rect: block.rect,
        kind: ColliderKind::Block(i),
    });
    platform_colliders.chain(block_colliders).collect()
}

/// Result of a vertical pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerticalContact {
    /// A downward move was stopped by a surface
    pub landed: bool,
    /// An upward move was stopped by a ceiling
    pub bumped_head: bool,
    /// Block struck from below, if the ceiling was one
    pub struck_block: Option<usize>,
}

/// Clamp `rect` out of every collider it overlaps after a horizontal move
/// of `vel_x`. Returns true if any clamp happened.
pub fn resolve_horizontal(rect: &mut Rect, vel_x: f32, colliders: &[Collider]) -> bool {
    let mut clamped = false;
    for collider in colliders {
        if !rect.intersects(&collider.rect) {
            continue;
        }
        if vel_x > 0.0 {
            rect.set_right(collider.rect.left());
            clamped = true;
        } else if vel_x < 0.0 {
            rect.set_left(collider.rect.right());
            clamped = true;
        }
    }
    clamped
}

/// Clamp `rect` out of the first collider it overlaps after a vertical move
/// of `vel_y`, reporting a landing, a head bump or a struck block.
///
/// The move's velocity is spent by the first correction; later overlaps are
/// left alone. `on_strike` runs for a block struck from below, before the
/// mover is pushed back under it.
pub fn resolve_vertical(
    rect: &mut Rect,
    vel_y: f32,
    colliders: &[Collider],
    mut on_strike: impl FnMut(usize),
) -> VerticalContact {
    let mut contact = VerticalContact::default();
    if vel_y == 0.0 {
        return contact;
    }
    let Some(collider) = colliders.iter().find(|c| rect.intersects(&c.rect)) else {
        return contact;
    };
    if vel_y > 0.0 {
        rect.set_bottom(collider.rect.top());
        contact.landed = true;
    } else {
        if let ColliderKind::Block(index) = collider.kind {
            on_strike(index);
            contact.struck_block = Some(index);
        }
        rect.set_top(collider.rect.bottom());
        contact.bumped_head = true;
    }
    contact
}
