//! Demo/attract-mode player
//!
//! Produces the input a careful player would: wait for the camera to settle,
//! then hold until the stick would reach a point on the next platform.

use super::state::{GameLoop, GameState};
use super::tick::TickInput;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Where to aim across the target platform (0 = near edge, 1 = far edge)
    pub aim: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { aim: 0.5 }
    }
}

impl Autopilot {
    pub fn new(aim: f32) -> Self {
        Self {
            aim: aim.clamp(0.0, 1.0),
        }
    }

    /// World x the autopilot wants the stick to reach
    pub fn aim_x<R>(&self, game: &GameLoop<R>) -> f32 {
        let target = game.next_platform();
        target.x as f32 + target.width as f32 * self.aim
    }

    pub fn decide<R>(&self, game: &GameLoop<R>) -> TickInput {
        let held = match game.state() {
            // Let the glide finish so the reset doesn't eat the stick
            GameState::Idle => !game.is_scrolling(),
            GameState::Stretching => game.stick_end_x() < self.aim_x(game),
            GameState::Rotating | GameState::Walking | GameState::Falling => false,
        };
        TickInput::held(held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Platform;
    use crate::sim::tick;

    #[test]
    fn test_autopilot_crosses() {
        let mut game = GameLoop::new(5);
        game.set_platforms(Platform::new(50, 40), Platform::new(150, 50));
        let pilot = Autopilot::default();
        assert_eq!(pilot.aim_x(&game), 175.0);

        while !game.is_scrolling() {
            let input = pilot.decide(&game);
            tick::tick(&mut game, &input);
            assert_ne!(game.state(), GameState::Falling);
        }
        assert_eq!(game.stick_end_x(), 176.0);
    }

    #[test]
    fn test_autopilot_waits_for_glide() {
        let mut game = GameLoop::new(5);
        game.set_platforms(Platform::new(50, 40), Platform::new(150, 50));
        let pilot = Autopilot::default();
        while !game.is_scrolling() {
            let input = pilot.decide(&game);
            tick::tick(&mut game, &input);
        }
        assert_eq!(game.state(), GameState::Idle);
        assert!(!pilot.decide(&game).held);
    }

    #[test]
    fn test_aim_is_clamped() {
        assert_eq!(Autopilot::new(3.0).aim, 1.0);
        assert_eq!(Autopilot::new(-1.0).aim, 0.0);
    }
}
