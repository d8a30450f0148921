//! Neck radius and curvature spread
//!
//! Two empirical shaping functions borrowed loosely from capillary physics:
//!
//! ## Pinch-off
//! A stretched liquid thread thins following a self-similar power law, so the
//! neck shrinks as `(1 - s)^(2/3)` with normalized stretch `s`. A floor keeps
//! the geometry visibly non-zero right up to rupture.
//!
//! ## Curvature (Young-Laplace)
//! A narrower neck relative to the drop means higher wall curvature. Higher
//! curvature and more stretch both pull the Bezier handles in, turning the
//! capsule silhouette into a concave hourglass meniscus.

use super::interpolate::{interpolate_clamped, scaled_stops};
use crate::finite_or;
use crate::tuning::BridgeTuning;

/// Stretch ratio in [0, 1]. A non-positive limit counts as fully stretched.
#[inline]
pub(crate) fn stretch_ratio(distance: f32, max_stretch: f32) -> f32 {
    if !(max_stretch > 0.0) {
        return 1.0;
    }
    finite_or(distance / max_stretch, 1.0).clamp(0.0, 1.0)
}

/// Neck radius of a circle of `base_radius` stretched over `distance`
///
/// Non-increasing in `distance`, always within `[floor * r, r]`.
pub fn compute_neck_radius(base_radius: f32, distance: f32, max_stretch: f32) -> f32 {
    compute_neck_radius_with(&BridgeTuning::DEFAULT, base_radius, distance, max_stretch)
}

pub fn compute_neck_radius_with(
    tuning: &BridgeTuning,
    base_radius: f32,
    distance: f32,
    max_stretch: f32,
) -> f32 {
    let r = finite_or(base_radius, 0.0).max(0.0);
    let s = stretch_ratio(distance, max_stretch);
    let necked = r * (1.0 - s).powf(tuning.neck_exponent);
    necked.max(r * tuning.neck_floor)
}

/// Dimensionless Bezier handle spread, roughly in [0.05, 0.5]
pub fn compute_curvature_spread(
    distance: f32,
    max_stretch: f32,
    neck_radius: f32,
    base_radius: f32,
) -> f32 {
    compute_curvature_spread_with(
        &BridgeTuning::DEFAULT,
        distance,
        max_stretch,
        neck_radius,
        base_radius,
    )
}

pub fn compute_curvature_spread_with(
    tuning: &BridgeTuning,
    distance: f32,
    max_stretch: f32,
    neck_radius: f32,
    base_radius: f32,
) -> f32 {
    let neck = finite_or(neck_radius, 0.0).max(tuning.curvature_neck_floor);
    let curvature = finite_or(base_radius, 0.0).max(0.0) / neck;

    let limit = finite_or(max_stretch, 0.0).max(0.0);
    let stops = scaled_stops(&[0.0, 0.5, 1.0], limit);
    let stretch_penalty = interpolate_clamped(distance, &stops, &tuning.stretch_penalty);

    let curvature_effect = finite_or(curvature * tuning.curvature_gain, tuning.curvature_cap)
        .min(tuning.curvature_cap);

    (tuning.base_spread - stretch_penalty - curvature_effect).max(tuning.min_spread)
}
