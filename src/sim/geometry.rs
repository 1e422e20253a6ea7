//! Bridge geometry: landing checks and the stick pose
//!
//! Screen space is y-down. The stick pivots at the top right corner of the
//! current platform; angle 0 is upright and positive angles rotate clockwise,
//! so 90 degrees lays the stick flat across the gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Platform;

/// World x of the stick tip once it lies flat
#[inline]
pub fn stick_end_x(current: &Platform, stick_length: f32) -> f32 {
    current.right_edge() as f32 + stick_length
}

/// Inclusive at both edges: touching either corner counts as a landing
#[inline]
pub fn lands_on(target: &Platform, x: f32) -> bool {
    x >= target.x as f32 && x <= target.right_edge() as f32
}

/// A rectangle rotated about a pivot on its bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedRect {
    /// Bottom-center of the rectangle; rotation happens around this point
    pub pivot: Vec2,
    /// (thickness, length)
    pub size: Vec2,
    /// Clockwise rotation from upright (radians)
    pub angle: f32,
}

impl RotatedRect {
    pub fn new(pivot: Vec2, size: Vec2, angle_degrees: f32) -> Self {
        Self {
            pivot,
            size,
            angle: angle_degrees.to_radians(),
        }
    }

    /// Rotate a pivot-relative offset into screen space
    #[inline]
    fn transform(&self, local: Vec2) -> Vec2 {
        self.pivot + Vec2::from_angle(self.angle).rotate(local)
    }

    /// The far end of the rectangle's long axis
    pub fn tip(&self) -> Vec2 {
        self.transform(Vec2::new(0.0, -self.size.y))
    }

    /// Corners in drawing order: bottom-left, top-left, top-right, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        let half = self.size.x / 2.0;
        [
            self.transform(Vec2::new(-half, 0.0)),
            self.transform(Vec2::new(-half, -self.size.y)),
            self.transform(Vec2::new(half, -self.size.y)),
            self.transform(Vec2::new(half, 0.0)),
        ]
    }
}
