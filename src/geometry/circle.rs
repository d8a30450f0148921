//! Circle endpoints of a bridge
//!
//! The consuming UI thinks of one circle as the anchor and the other as the
//! moving drop, but the geometry treats them symmetrically.

use glam::Vec2;

use crate::finite_or;

/// A 2D circle (center + radius)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub r: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, r: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            r,
        }
    }

    /// Copy with non-finite coordinates zeroed and negative radius clamped to 0
    pub fn sanitized(self) -> Self {
        Self {
            center: Vec2::new(finite_or(self.center.x, 0.0), finite_or(self.center.y, 0.0)),
            r: finite_or(self.r, 0.0).max(0.0),
        }
    }

    /// Euclidean distance between centers
    #[inline]
    pub fn distance_to(&self, other: &Circle) -> f32 {
        self.center.distance(other.center)
    }

    /// Angle of the axis from this center to `other` (radians)
    #[inline]
    pub fn angle_to(&self, other: &Circle) -> f32 {
        let d = other.center - self.center;
        d.y.atan2(d.x)
    }

    /// Point on a circle of `radius` around this center, along `dir`
    #[inline]
    pub fn point_along(&self, dir: Vec2, radius: f32) -> Vec2 {
        self.center + dir * radius
    }

    /// Whether the two discs overlap or touch
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.distance_to(other) <= self.r + other.r
    }
}
