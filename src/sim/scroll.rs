//! Camera glide between a landing and the level reset
//!
//! Runs alongside [`GameState`](super::GameState) rather than as one of its
//! variants. The glide only moves the draw offset; world coordinates are
//! rebased once, by the full target distance, when it completes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ScrollPhase {
    #[default]
    Inactive,
    Gliding {
        /// Camera shift applied at draw time so far
        offset: f32,
        /// Distance to shift before rebasing
        target: f32,
    },
}

impl ScrollPhase {
    pub fn start(target: f32) -> Self {
        ScrollPhase::Gliding {
            offset: 0.0,
            target,
        }
    }

    pub fn is_gliding(&self) -> bool {
        matches!(self, ScrollPhase::Gliding { .. })
    }

    /// Current draw offset (0 when inactive)
    pub fn offset(&self) -> f32 {
        match *self {
            ScrollPhase::Gliding { offset, .. } => offset,
            ScrollPhase::Inactive => 0.0,
        }
    }

    pub fn target(&self) -> Option<f32> {
        match *self {
            ScrollPhase::Gliding { target, .. } => Some(target),
            ScrollPhase::Inactive => None,
        }
    }

    /// Advance the glide by `speed`.
    ///
    /// Returns the rebasing delta on the tick the glide finishes. The delta is
    /// always the requested target, never the overshot offset.
    pub fn step(&mut self, speed: f32) -> Option<f32> {
        let ScrollPhase::Gliding { offset, target } = self else {
            return None;
        };

        *offset += speed;
        log::trace!("Glide {:.1}/{:.1}", offset, target);
        if *offset >= *target {
            let delta = *target;
            *self = ScrollPhase::Inactive;
            Some(delta)
        } else {
            None
        }
    }
}
