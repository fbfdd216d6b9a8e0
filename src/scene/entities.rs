//! Blocks, coins and enemies

use glam::Vec2;

use super::draw::{DrawList, Paint, colors};
use crate::consts::COIN_RADIUS;
use crate::sim::{Block, Enemy};

const BLOCK_OUTLINE: f32 = 3.0;
const COIN_OUTLINE: f32 = 2.0;

/// A block at its bounced height, followed by its rising coins
pub fn draw_block(list: &mut DrawList, block: &Block, camera_x: f32) {
    let r = block.rect.translated(-camera_x, block.bounce_offset);
    let fill = if block.used {
        colors::BLOCK_USED
    } else {
        colors::BLOCK
    };
    list.outlined_rect(r, 0.0, fill, colors::BLOCK_OUTLINE, BLOCK_OUTLINE);

    for coin in &block.coins {
        let center = Vec2::new(block.rect.center_x() - camera_x, coin.y);
        list.circle(center, COIN_RADIUS, Paint::Fill, colors::COIN);
        list.circle(center, COIN_RADIUS, Paint::Stroke(COIN_OUTLINE), colors::COIN_OUTLINE);
    }
}

pub fn draw_enemy(list: &mut DrawList, enemy: &Enemy, camera_x: f32) {
    list.ellipse(enemy.rect.translated(-camera_x, 0.0), Paint::Fill, colors::ENEMY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::draw::DrawCommand;
    use crate::sim::Rect;

    #[test]
    fn test_fresh_block() {
        let block = Block::new(600.0, 276.0).unwrap();
        let mut list = DrawList::new();
        draw_block(&mut list, &block, 100.0);
        assert_eq!(list.len(), 2);
        assert!(matches!(
            list.commands[0],
            DrawCommand::Rect { rect, color, .. }
                if rect == Rect::new(500.0, 276.0, 40.0, 40.0) && color == colors::BLOCK
        ));
    }

    #[test]
    fn test_struck_block_bounces_and_shows_coin() {
        let mut block = Block::new(600.0, 276.0).unwrap();
        assert!(block.hit());
        block.update(1.0 / 60.0);

        let mut list = DrawList::new();
        draw_block(&mut list, &block, 0.0);
        assert_eq!(list.len(), 4);
        match list.commands[0] {
            DrawCommand::Rect { rect, color, .. } => {
                assert!(rect.y < 276.0);
                assert_eq!(color, colors::BLOCK_USED);
            }
            ref other => panic!("expected block, got {other:?}"),
        }
        match list.commands[2] {
            DrawCommand::Circle {
                center, radius, color, ..
            } => {
                assert_eq!(center, Vec2::new(620.0, block.coins[0].y));
                assert_eq!(radius, 8.0);
                assert_eq!(color, colors::COIN);
            }
            ref other => panic!("expected coin, got {other:?}"),
        }
    }

    #[test]
    fn test_enemy_is_an_ellipse() {
        let enemy = Enemy::new(500.0, 496.0).unwrap();
        let mut list = DrawList::new();
        draw_enemy(&mut list, &enemy, 300.0);
        assert_eq!(
            list.commands,
            vec![DrawCommand::Ellipse {
                bounds: Rect::new(200.0, 496.0, 40.0, 40.0),
                paint: Paint::Fill,
                color: colors::ENEMY,
            }]
        );
    }
}
