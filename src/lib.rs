//! Stick Bridge - a timing-based platform bridging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, landing geometry, glide)
//! - `render`: Draw-command contract the host renderer implements
//! - `settings`: Named gameplay and visual constants

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, GameConfig};
pub use sim::{GameLoop, GameState, Platform, TickInput};

/// Game configuration defaults
pub mod consts {
    /// Logical screen size (world units)
    pub const SCREEN_WIDTH: i32 = 480;
    pub const SCREEN_HEIGHT: i32 = 320;

    /// Platform defaults
    pub const PLATFORM_HEIGHT: i32 = 100;
    pub const INITIAL_PLATFORM_X: i32 = 50;
    pub const INITIAL_PLATFORM_WIDTH: i32 = 40;

    /// Per-tick speeds
    pub const STRETCH_SPEED: f32 = 2.0;
    pub const ROTATE_SPEED: f32 = 4.0; // degrees per tick
    pub const WALK_SPEED: f32 = 2.0;
    pub const SCROLL_SPEED: f32 = 4.0;

    /// Stick is fully down at this angle (degrees from upright)
    pub const STICK_FLAT_ANGLE: f32 = 90.0;
    pub const STICK_THICKNESS: f32 = 2.0;

    /// Character placeholder
    pub const CHAR_START_OFFSET: f32 = 10.0;
    pub const CHAR_WIDTH: f32 = 10.0;
    pub const CHAR_HEIGHT: f32 = 20.0;

    /// Next platform generation: x = p0.x + GAP_MIN + rand(0..GAP_RANGE)
    pub const GAP_MIN: i32 = 100;
    pub const GAP_RANGE: i32 = 100;
    /// Next platform width = WIDTH_MIN + rand(0..WIDTH_RANGE)
    pub const WIDTH_MIN: i32 = 40;
    pub const WIDTH_RANGE: i32 = 30;
}
