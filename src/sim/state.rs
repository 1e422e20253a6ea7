//! Game state and core simulation types
//!
//! Everything the renderer needs is readable through [`GameLoop`]'s query
//! methods; only the tick function mutates it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{self, RotatedRect};
use super::scroll::ScrollPhase;
use crate::consts::STICK_FLAT_ANGLE;
use crate::settings::{ConfigError, GameConfig};

/// Current step of the bridging cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for input
    #[default]
    Idle,
    /// Input held, stick growing
    Stretching,
    /// Input released, stick falling toward the next platform
    Rotating,
    /// Stick is flat, character crossing
    Walking,
    /// Missed the platform (lasts one tick)
    Falling,
}

/// A platform the character can stand on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub x: i32,
    pub width: i32,
}

impl Platform {
    /// Width is clamped to at least 1 so the landing interval is never empty
    pub fn new(x: i32, width: i32) -> Self {
        Self {
            x,
            width: width.max(1),
        }
    }

    #[inline]
    pub fn right_edge(&self) -> i32 {
        self.x + self.width
    }
}

/// The bridging stick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stick {
    pub length: f32,
    /// Degrees from upright, 0..=90
    pub angle: f32,
    /// Set once the stick lies flat
    pub rotated: bool,
}

impl Stick {
    pub fn grow(&mut self, amount: f32) {
        self.length = (self.length + amount).max(0.0);
    }

    /// Rotate toward flat. Returns true once the stick is down.
    pub fn rotate(&mut self, step: f32) -> bool {
        self.angle = (self.angle + step).min(STICK_FLAT_ANGLE);
        if self.angle >= STICK_FLAT_ANGLE {
            self.rotated = true;
        }
        self.rotated
    }
}

/// Read-only copy of everything a renderer or debugger looks at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub stick: Stick,
    pub platforms: [Platform; 2],
    pub char_x: f32,
    pub char_moving: bool,
    pub bg_offset: f32,
    pub scrolling: bool,
    pub time_ticks: u64,
}

/// Complete game: simulation state plus its random source
///
/// The generator is a type parameter so tests and replays can inject their
/// own; [`GameLoop::new`] seeds a `Pcg32`.
#[derive(Debug, Clone)]
pub struct GameLoop<R = Pcg32> {
    pub(crate) config: GameConfig,
    pub(crate) state: GameState,
    pub(crate) stick: Stick,
    /// Slot 0 is the platform being stood on, slot 1 the target
    pub(crate) platforms: [Platform; 2],
    pub(crate) char_x: f32,
    pub(crate) char_moving: bool,
    pub(crate) scroll: ScrollPhase,
    pub(crate) time_ticks: u64,
    rng: R,
}

impl GameLoop<Pcg32> {
    /// Create a game with the default config and the given seed
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), Pcg32::seed_from_u64(seed))
    }

    /// Create a game with a custom config and the given seed
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameLoop<R> {
    /// Create a game drawing platform placement from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: GameConfig, rng: R) -> Self {
        let start = Platform::new(config.initial_platform_x, config.initial_platform_width);
        let mut game = Self {
            char_x: start.x as f32 + config.char_start_offset,
            config,
            state: GameState::Idle,
            stick: Stick::default(),
            platforms: [start, start],
            char_moving: false,
            scroll: ScrollPhase::Inactive,
            time_ticks: 0,
            rng,
        };
        game.platforms[1] = game.generate_next(&start);
        log::debug!(
            "New game: platforms {:?} -> {:?}",
            game.platforms[0],
            game.platforms[1]
        );
        game
    }

    /// Place a new target platform ahead of `current`
    pub(crate) fn generate_next(&mut self, current: &Platform) -> Platform {
        let gap = self.config.gap_min + roll(&mut self.rng, self.config.gap_range);
        let width = self.config.width_min + roll(&mut self.rng, self.config.width_range);
        Platform::new(current.x + gap, width)
    }

    /// Promote the reached platform to slot 0 and generate a fresh target.
    /// The character is left where rebasing put it.
    pub(crate) fn reset_level(&mut self) {
        self.platforms[0] = self.platforms[1];
        let current = self.platforms[0];
        self.platforms[1] = self.generate_next(&current);
        self.stick = Stick::default();
        log::info!(
            "Level reset: standing on {:?}, next {:?}",
            self.platforms[0],
            self.platforms[1]
        );
    }

    /// Shift every world x left by `delta` after a glide completes
    pub(crate) fn rebase(&mut self, delta: f32) {
        let shift = delta.round() as i32;
        for platform in &mut self.platforms {
            platform.x -= shift;
        }
        self.char_x -= delta;
    }
}

fn roll<R: Rng>(rng: &mut R, range: i32) -> i32 {
    if range > 0 { rng.random_range(0..range) } else { 0 }
}

impl<R> GameLoop<R> {
    /// Replace both platforms and put the character back at its start offset.
    /// Clears the stick and any glide; used for fixed layouts.
    pub fn set_platforms(&mut self, current: Platform, next: Platform) {
        self.platforms = [current, next];
        self.char_x = current.x as f32 + self.config.char_start_offset;
        self.char_moving = false;
        self.stick = Stick::default();
        self.scroll = ScrollPhase::Inactive;
        self.state = GameState::Idle;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn stick(&self) -> &Stick {
        &self.stick
    }

    pub fn stick_length(&self) -> f32 {
        self.stick.length
    }

    pub fn stick_angle(&self) -> f32 {
        self.stick.angle
    }

    pub fn stick_rotated(&self) -> bool {
        self.stick.rotated
    }

    pub fn platforms(&self) -> &[Platform; 2] {
        &self.platforms
    }

    pub fn current_platform(&self) -> &Platform {
        &self.platforms[0]
    }

    pub fn next_platform(&self) -> &Platform {
        &self.platforms[1]
    }

    pub fn char_x(&self) -> f32 {
        self.char_x
    }

    pub fn char_moving(&self) -> bool {
        self.char_moving
    }

    pub fn bg_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn scroll(&self) -> &ScrollPhase {
        &self.scroll
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_gliding()
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// World x the stick tip reaches once flat
    pub fn stick_end_x(&self) -> f32 {
        geometry::stick_end_x(&self.platforms[0], self.stick.length)
    }

    /// Screen-space pivot of the stick (top right corner of platform 0)
    pub fn stick_anchor(&self) -> Vec2 {
        Vec2::new(
            self.platforms[0].right_edge() as f32 - self.bg_offset(),
            self.config.ground_y(),
        )
    }

    /// Screen-space stick rectangle at its current angle
    pub fn stick_pose(&self) -> RotatedRect {
        RotatedRect::new(
            self.stick_anchor(),
            Vec2::new(self.config.stick_thickness, self.stick.length),
            self.stick.angle,
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            stick: self.stick,
            platforms: self.platforms,
            char_x: self.char_x,
            char_moving: self.char_moving,
            bg_offset: self.bg_offset(),
            scrolling: self.is_scrolling(),
            time_ticks: self.time_ticks,
        }
    }
}
