//! One simulation frame
//!
//! Physics constants are per frame; `dt` only drives animation timers.

use glam::Vec2;

use super::enemy::Enemy;
use super::input::FrameInput;
use super::player::Player;
use super::world::World;
use crate::consts::*;

/// Things that happened during a frame, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The player left the ground
    Jumped,
    /// A fresh block was struck from below and released a coin
    BlockHit { block: usize },
    /// The player landed on an enemy, removing it
    EnemyStomped { at: Vec2 },
    /// The player ran into an enemy and was shoved back
    EnemyBumped,
    /// A quit request ended the run after this frame
    Quit,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if world.finished {
        return events;
    }
    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    world.frame += 1;

    // Jump is an edge event and sees last frame's ground/crouch state
    if input.jump_pressed && world.player.jump() {
        events.push(GameEvent::Jumped);
    }

    let player = &mut world.player;
    player.handle_input(input);
    player.apply_gravity();
    for block in player.move_and_collide(&world.platforms, &mut world.blocks) {
        log::debug!("Frame {}: block {} struck", world.frame, block);
        events.push(GameEvent::BlockHit { block });
    }
    player.update_animation(dt, &mut world.rng);

    for block in &mut world.blocks {
        block.update(dt);
    }
    for enemy in &mut world.enemies {
        enemy.update(&world.platforms);
    }

    resolve_enemy_contacts(&mut world.player, &mut world.enemies, &mut events);

    world.camera.follow(world.player.rect.center_x());

    if input.quit {
        log::info!("Quit requested at frame {}", world.frame);
        world.finished = true;
        events.push(GameEvent::Quit);
    }

    events
}

/// Stomp enemies the player falls onto; shove the player off the rest.
///
/// Enemies are checked in order against the player's current state, so a
/// stomp bounce turns later contacts in the same frame into bumps.
fn resolve_enemy_contacts(player: &mut Player, enemies: &mut Vec<Enemy>, events: &mut Vec<GameEvent>) {
    enemies.retain(|enemy| {
        if !player.rect.intersects(&enemy.rect) {
            return true;
        }
        if player.vel.y > 0.0 {
            player.vel.y = STOMP_BOUNCE;
            log::debug!("Enemy stomped at ({:.0}, {:.0})", enemy.rect.x, enemy.rect.y);
            events.push(GameEvent::EnemyStomped {
                at: enemy.rect.center(),
            });
            false
        } else {
            player.rect.x -= player.vel.x * 2.0;
            events.push(GameEvent::EnemyBumped);
            true
        }
    });
}
