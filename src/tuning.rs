//! Data-driven bridge tuning
//!
//! The curve family is shaped by a handful of empirical constants. Defaults
//! reproduce the fixed design; callers replicating the shape language rather
//! than exact output can load overrides from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Curve-shaping constants for the physics bridge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeTuning {
    /// Pinch-off exponent applied to (1 - stretch)
    pub neck_exponent: f32,
    /// Neck floor as a fraction of base radius
    pub neck_floor: f32,
    pub curvature_neck_floor: f32,
    pub curvature_gain: f32,
    pub curvature_cap: f32,
    pub base_spread: f32,
    pub min_spread: f32,
    /// Penalty at 0, half and full stretch
    pub stretch_penalty: [f32; 3],
    pub wall_blend: f32,
    pub waist_scale: f32,
    pub handle_blend: f32,
}

impl BridgeTuning {
    pub const DEFAULT: Self = Self {
        neck_exponent: NECK_EXPONENT,
        neck_floor: NECK_FLOOR,
        curvature_neck_floor: CURVATURE_NECK_FLOOR,
        curvature_gain: CURVATURE_GAIN,
        curvature_cap: CURVATURE_CAP,
        base_spread: BASE_SPREAD,
        min_spread: MIN_SPREAD,
        stretch_penalty: STRETCH_PENALTY,
        wall_blend: WALL_BLEND,
        waist_scale: WAIST_SCALE,
        handle_blend: HANDLE_BLEND,
    };

    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp every field into a range that keeps the geometry well-formed
    pub fn sanitized(mut self) -> Self {
        let before = self;

        self.neck_exponent = clamp_field(self.neck_exponent, 0.0, 4.0, NECK_EXPONENT);
        self.neck_floor = clamp_field(self.neck_floor, 0.0, 1.0, NECK_FLOOR);
        self.curvature_neck_floor =
            clamp_field(self.curvature_neck_floor, 1e-3, f32::MAX, CURVATURE_NECK_FLOOR);
        self.curvature_gain = clamp_field(self.curvature_gain, 0.0, 1.0, CURVATURE_GAIN);
        self.curvature_cap = clamp_field(self.curvature_cap, 0.0, 1.0, CURVATURE_CAP);
        self.min_spread = clamp_field(self.min_spread, 0.0, 1.0, MIN_SPREAD);
        self.base_spread = clamp_field(self.base_spread, self.min_spread, 1.0, BASE_SPREAD);
        for (value, fallback) in self.stretch_penalty.iter_mut().zip(STRETCH_PENALTY) {
            *value = clamp_field(*value, 0.0, 1.0, fallback);
        }
        self.wall_blend = clamp_field(self.wall_blend, 0.0, 1.0, WALL_BLEND);
        self.waist_scale = clamp_field(self.waist_scale, 0.0, 1.0, WAIST_SCALE);
        self.handle_blend = clamp_field(self.handle_blend, 0.0, 1.0, HANDLE_BLEND);

        if self != before {
            log::warn!("Bridge tuning contained out-of-range values; clamped");
        }
        self
    }
}

impl Default for BridgeTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn clamp_field(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
