//! Gameplay and visual configuration
//!
//! All speeds are in world units (or degrees) per tick.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i32 },
    #[error("gap_min ({gap_min}) must exceed the widest platform ({widest}) to leave a gap")]
    NoGap { gap_min: i32, widest: i32 },
}

/// Named constants driving the simulation and the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub platform_height: i32,

    // === Speeds ===
    pub stretch_speed: f32,
    /// Degrees per tick
    pub rotate_speed: f32,
    pub walk_speed: f32,
    pub scroll_speed: f32,

    // === Layout ===
    pub initial_platform_x: i32,
    pub initial_platform_width: i32,
    /// Character start position relative to platform 0
    pub char_start_offset: f32,
    pub char_width: f32,
    pub char_height: f32,
    pub stick_thickness: f32,

    // === Platform generation ===
    pub gap_min: i32,
    pub gap_range: i32,
    pub width_min: i32,
    pub width_range: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            platform_height: PLATFORM_HEIGHT,

            stretch_speed: STRETCH_SPEED,
            rotate_speed: ROTATE_SPEED,
            walk_speed: WALK_SPEED,
            scroll_speed: SCROLL_SPEED,

            initial_platform_x: INITIAL_PLATFORM_X,
            initial_platform_width: INITIAL_PLATFORM_WIDTH,
            char_start_offset: CHAR_START_OFFSET,
            char_width: CHAR_WIDTH,
            char_height: CHAR_HEIGHT,
            stick_thickness: STICK_THICKNESS,

            gap_min: GAP_MIN,
            gap_range: GAP_RANGE,
            width_min: WIDTH_MIN,
            width_range: WIDTH_RANGE,
        }
    }
}

impl GameConfig {
    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded game config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Y coordinate of the platform tops (the ground line)
    pub fn ground_y(&self) -> f32 {
        (self.screen_height - self.platform_height) as f32
    }

    /// Widest platform generation can produce
    pub fn widest_platform(&self) -> i32 {
        self.initial_platform_width
            .max(self.width_min + (self.width_range - 1).max(0))
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width as f32),
            ("screen_height", self.screen_height as f32),
            ("platform_height", self.platform_height as f32),
            ("stretch_speed", self.stretch_speed),
            ("rotate_speed", self.rotate_speed),
            ("walk_speed", self.walk_speed),
            ("scroll_speed", self.scroll_speed),
            ("initial_platform_width", self.initial_platform_width as f32),
            ("width_min", self.width_min as f32),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [("gap_range", self.gap_range), ("width_range", self.width_range)] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let widest = self.widest_platform();
        if self.gap_min <= widest {
            return Err(ConfigError::NoGap {
                gap_min: self.gap_min,
                widest,
            });
        }

        Ok(())
    }
}
