//! Planar world coordinates.
//!
//! `WorldPos` uses `f32` screen-style coordinates: x grows right, y grows
//! down, angles are measured clockwise from the +x axis in `[0, 2π)`.  With a
//! 60-unit hex edge, single precision keeps sub-millimetre accuracy across
//! any map that fits on a screen many times over.

use crate::angle;

/// A point in the world coordinate system.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: WorldPos) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared distance — cheaper when only comparing magnitudes.
    #[inline]
    pub fn distance_sq(self, other: WorldPos) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Bearing from `self` to `other`, normalized to `[0, 2π)`.
    pub fn bearing_to(self, other: WorldPos) -> f32 {
        angle::normalize((other.y - self.y).atan2(other.x - self.x))
    }

    /// The point `dist` units from `self` along heading `heading`.
    #[inline]
    pub fn advance(self, dist: f32, heading: f32) -> WorldPos {
        WorldPos {
            x: self.x + dist * heading.cos(),
            y: self.y + dist * heading.sin(),
        }
    }
}

impl std::fmt::Display for WorldPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
