//! Scene composition
//!
//! Turns a `World` snapshot into a `DrawList`. Nothing here mutates the
//! world; the renderer consumes the list without knowing about entities.

pub mod background;
pub mod draw;
pub mod entities;
pub mod player;
pub mod pose;

pub use draw::{Color, DrawCommand, DrawList, Paint, Sprite, colors};
pub use pose::PlayerPose;

use crate::settings::Settings;
use crate::sim::World;

/// Draw one frame, back to front: sky, scenery, platforms, blocks, enemies,
/// player
pub fn compose(world: &World, settings: &Settings) -> DrawList {
    let camera_x = world.camera.x;
    let mut list = DrawList::new();

    list.clear(colors::SKY);
    background::draw_background(&mut list, camera_x, settings);
    background::draw_platforms(&mut list, &world.platforms, camera_x);
    for block in &world.blocks {
        entities::draw_block(&mut list, block, camera_x);
    }
    for enemy in &world.enemies {
        entities::draw_enemy(&mut list, enemy, camera_x);
    }
    list.sprite(player::draw_player(
        &world.player,
        camera_x,
        settings.reduced_motion,
    ));

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_layers_in_order() {
        let world = World::new(1).unwrap();
        let list = compose(&world, &Settings::default());

        assert_eq!(list.commands.first(), Some(&DrawCommand::Clear(colors::SKY)));
        assert!(matches!(list.commands.last(), Some(DrawCommand::Sprite(_))));

        let enemies = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Ellipse { color, .. } if *color == colors::ENEMY))
            .count();
        assert_eq!(enemies, 3);
    }

    #[test]
    fn test_compose_count_without_scenery() {
        let world = World::new(1).unwrap();
        let settings = Settings {
            show_scenery: false,
            ..Settings::default()
        };
        let list = compose(&world, &settings);
        // clear + 5 platforms x2 + 3 blocks x2 + 3 enemies + player
        assert_eq!(list.len(), 1 + 10 + 6 + 3 + 1);
    }
}
