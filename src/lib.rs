//! Liquid Bridge - metaball geometry for fluid navigation animations
//!
//! Core modules:
//! - `geometry`: Pure per-frame bridge geometry (neck, spread, paths, opacity)
//! - `tuning`: Data-driven curve-shaping constants
//! - `settings`: Consumer preferences (fidelity, reduced motion) with JSON persistence
//! - `wasm`: Bindings for the JS animation driver (wasm32 only)

pub mod geometry;
pub mod settings;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use geometry::{
    BridgePath, BridgePhase, BridgeState, Circle, PathCommand, compute_bridge_opacity,
    compute_curvature_spread, compute_neck_radius, get_metaball_path, physics_metaball_path,
    simple_metaball_path,
};
pub use settings::{Fidelity, Settings};
pub use tuning::BridgeTuning;

use glam::Vec2;

/// Fixed design constants for the bridge curve family
pub mod consts {
    /// Pinch-off power law exponent for the neck radius
    pub const NECK_EXPONENT: f32 = 2.0 / 3.0;
    /// Neck never narrows below this fraction of the base radius
    pub const NECK_FLOOR: f32 = 0.08;

    /// Smallest neck used when estimating curvature
    pub const CURVATURE_NECK_FLOOR: f32 = 0.1;
    /// Curvature to spread reduction gain
    pub const CURVATURE_GAIN: f32 = 0.05;
    /// Maximum spread reduction from curvature
    pub const CURVATURE_CAP: f32 = 0.25;

    /// Spread with no stretch and no curvature
    pub const BASE_SPREAD: f32 = 0.5;
    /// Spread never drops below this
    pub const MIN_SPREAD: f32 = 0.05;
    /// Stretch penalty at 0, half and full stretch
    pub const STRETCH_PENALTY: [f32; 3] = [0.0, 0.1, 0.4];

    /// Fraction of the tangent-to-waist offset applied to the first wall control
    pub const WALL_BLEND: f32 = 0.33;
    /// Waist half-width as a fraction of the narrower neck
    pub const WAIST_SCALE: f32 = 0.6;
    /// Waist-side handle length as a fraction of the circle-side handle
    pub const HANDLE_BLEND: f32 = 0.7;

    /// Merge opacity: breakpoints (fraction of limit) and values
    pub const MERGE_STOPS: [f32; 4] = [0.0, 0.6, 0.85, 1.0];
    pub const MERGE_OPACITY: [f32; 4] = [1.0, 0.85, 0.4, 0.0];

    /// Bud opacity: breakpoints (fraction of limit) and values
    pub const BUD_STOPS: [f32; 4] = [0.0, 0.2, 0.6, 1.0];
    pub const BUD_OPACITY: [f32; 4] = [0.0, 0.6, 0.9, 0.0];
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Unit vector pointing along `theta` (radians)
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Replace non-finite values with `fallback`
#[inline]
pub(crate) fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
