//! Fixed timestep simulation tick
//!
//! Advances the bridging state machine by exactly one step, then the glide.

use rand::Rng;

use super::geometry;
use super::scroll::ScrollPhase;
use super::state::{GameLoop, GameState};

/// Input for a single tick (sampled once, before the tick runs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Bridging action is held (pointer button / key down)
    pub held: bool,
}

impl TickInput {
    pub fn held(held: bool) -> Self {
        Self { held }
    }
}

/// Host-provided input capability, polled once per tick
pub trait InputSource {
    fn is_held(&mut self) -> bool;

    fn sample(&mut self) -> TickInput {
        TickInput::held(self.is_held())
    }
}

impl<F: FnMut() -> bool> InputSource for F {
    fn is_held(&mut self) -> bool {
        self()
    }
}

/// Advance the game by one fixed timestep
pub fn tick<R: Rng>(game: &mut GameLoop<R>, input: &TickInput) {
    game.time_ticks += 1;

    let before = game.state;
    match game.state {
        GameState::Idle => {
            if input.held {
                game.state = GameState::Stretching;
            }
        }

        GameState::Stretching => {
            if input.held {
                game.stick.grow(game.config.stretch_speed);
            } else {
                game.state = GameState::Rotating;
            }
        }

        GameState::Rotating => {
            if game.stick.rotate(game.config.rotate_speed) {
                game.state = GameState::Walking;
            }
        }

        GameState::Walking => {
            game.char_moving = true;
            let stick_end = game.stick_end_x();
            if game.char_x < stick_end {
                game.char_x += game.config.walk_speed;
            } else {
                game.char_moving = false;
                let target = game.platforms[1];
                if geometry::lands_on(&target, stick_end) {
                    let distance = (target.x - game.platforms[0].x) as f32;
                    game.scroll = ScrollPhase::start(distance);
                    // Idle before the glide ends: a new stretch may start mid-glide
                    game.state = GameState::Idle;
                    log::info!("Landed at {:.1} on {:?}, gliding {}", stick_end, target, distance);
                } else {
                    game.state = GameState::Falling;
                    log::info!("Missed {:?}: stick ends at {:.1}", target, stick_end);
                }
            }
        }

        GameState::Falling => {
            game.state = GameState::Idle;
        }
    }

    if game.state != before {
        log::debug!(
            "Tick {}: {:?} -> {:?} (stick {:.1} @ {:.0} deg)",
            game.time_ticks,
            before,
            game.state,
            game.stick.length,
            game.stick.angle
        );
    }

    if let Some(delta) = game.scroll.step(game.config.scroll_speed) {
        game.rebase(delta);
        game.reset_level();
    }
}

impl<R: Rng> GameLoop<R> {
    /// Advance one tick with the given input snapshot
    pub fn advance(&mut self, input_held: bool) {
        tick(self, &TickInput::held(input_held));
    }

    /// Sample `input` once, then advance one tick
    pub fn advance_with<I: InputSource + ?Sized>(&mut self, input: &mut I) {
        let input = input.sample();
        tick(self, &input);
    }
}
