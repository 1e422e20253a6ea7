//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded (or injected) RNG only
//! - Input sampled once per tick
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod geometry;
pub mod scroll;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use geometry::{RotatedRect, lands_on, stick_end_x};
pub use scroll::ScrollPhase;
pub use state::{GameLoop, GameState, Platform, Snapshot, Stick};
pub use tick::{InputSource, TickInput, tick};
