//! One running game: world state plus the settings that shape its frames
//!
//! `Game::step` is the whole per-frame contract. Front ends feed it an
//! input snapshot and elapsed time and hand the returned draw list to a
//! renderer, or just inspect it in tests.

use crate::scene::{self, DrawList};
use crate::settings::Settings;
use crate::sim::{self, FrameInput, GameEvent, LevelError, World};

/// Output of one simulated frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub draw: DrawList,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub world: World,
    pub settings: Settings,
}

impl Game {
    /// Load the built-in level
    pub fn new(seed: u64, settings: Settings) -> Result<Self, LevelError> {
        Ok(Self {
            world: World::new(seed)?,
            settings,
        })
    }

    pub fn from_world(world: World, settings: Settings) -> Self {
        Self { world, settings }
    }

    /// Simulate one frame and draw the result
    pub fn step(&mut self, input: &FrameInput, dt: f32) -> Frame {
        let events = sim::tick(&mut self.world, input, dt);
        Frame {
            draw: self.draw(),
            events,
        }
    }

    /// Draw the current state without advancing it
    pub fn draw(&self) -> DrawList {
        scene::compose(&self.world, &self.settings)
    }

    /// True once a quit request has been handled
    pub fn finished(&self) -> bool {
        self.world.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{script, KeyboardState};
    use crate::scene::DrawCommand;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_step_runs_headless() {
        let mut game = Game::new(7, Settings::default()).unwrap();
        let input = FrameInput {
            right: true,
            ..FrameInput::IDLE
        };
        for _ in 0..120 {
            let frame = game.step(&input, DT);
            assert!(matches!(frame.draw.commands[0], DrawCommand::Clear(_)));
        }
        assert_eq!(game.world.frame, 120);
        assert!(game.world.player.rect.x > 100.0);
        assert_ne!(game.world.camera.x, 0.0);
    }

    #[test]
    fn test_quit_finishes_after_drawing_the_frame() {
        let mut game = Game::new(7, Settings::default()).unwrap();
        let frame = game.step(
            &FrameInput {
                quit: true,
                ..FrameInput::IDLE
            },
            DT,
        );
        assert!(frame.events.contains(&GameEvent::Quit));
        assert!(!frame.draw.is_empty());
        assert!(game.finished());

        // A finished game no longer advances
        let frame_count = game.world.frame;
        let frame = game.step(&FrameInput::IDLE, DT);
        assert!(frame.events.is_empty());
        assert_eq!(game.world.frame, frame_count);
    }

    #[test]
    fn test_demo_script_strikes_a_block_and_stomps_a_walker() {
        let mut game = Game::new(1, Settings::default()).unwrap();
        let mut keyboard = KeyboardState::new();
        let mut events = Vec::new();
        for frame in 0..200 {
            script::apply(script::DEMO, frame, &mut keyboard);
            let out = game.step(&keyboard.snapshot(), DT);
            events.extend(out.events.into_iter().map(|e| (game.world.frame, e)));
        }

        assert!(game.world.used_blocks() >= 1);
        assert!(game.world.blocks[0].used);
        assert_eq!(game.world.enemies.len(), 2);

        let hit_at = events
            .iter()
            .find(|(_, e)| matches!(e, GameEvent::BlockHit { .. }))
            .map(|(frame, _)| *frame);
        let stomp_at = events
            .iter()
            .find(|(_, e)| matches!(e, GameEvent::EnemyStomped { .. }))
            .map(|(frame, _)| *frame);
        assert!(hit_at.is_some() && stomp_at.is_some());
        assert!(hit_at < stomp_at);
        // The walker is dropped on from above, never run into
        assert!(!events.iter().any(|(_, e)| *e == GameEvent::EnemyBumped));
    }

    #[test]
    fn test_identical_seeds_draw_identically() {
        let mut a = Game::new(99, Settings::default()).unwrap();
        let mut b = Game::new(99, Settings::default()).unwrap();
        let input = FrameInput {
            left: true,
            ..FrameInput::IDLE
        };
        for _ in 0..30 {
            assert_eq!(a.step(&input, DT).draw, b.step(&input, DT).draw);
        }
    }
}
