//! Bridge opacity per transition phase

use serde::{Deserialize, Serialize};

use super::interpolate::{interpolate_clamped, scaled_stops};
use crate::consts::{BUD_OPACITY, BUD_STOPS, MERGE_OPACITY, MERGE_STOPS};
use crate::finite_or;

/// Which animated transition is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BridgePhase {
    /// A drop joining its host (fades out as it over-stretches)
    #[default]
    Merge,
    /// A drop budding off its host (fades in, then out near rupture)
    Bud,
}

impl BridgePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgePhase::Merge => "merge",
            BridgePhase::Bud => "bud",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "merge" => Some(BridgePhase::Merge),
            "bud" => Some(BridgePhase::Bud),
            _ => None,
        }
    }

    /// Breakpoints (fractions of the stretch limit) and opacities
    fn curve(&self) -> (&'static [f32; 4], &'static [f32; 4]) {
        match self {
            BridgePhase::Merge => (&MERGE_STOPS, &MERGE_OPACITY),
            BridgePhase::Bud => (&BUD_STOPS, &BUD_OPACITY),
        }
    }
}

/// Bridge opacity in [0, 1] at `distance` for the given phase
///
/// A NaN distance is treated as ruptured, matching `BridgeState::classify`.
pub fn compute_bridge_opacity(distance: f32, stretch_limit: f32, phase: BridgePhase) -> f32 {
    let distance = if distance.is_nan() { f32::INFINITY } else { distance };
    let (fractions, values) = phase.curve();
    let limit = finite_or(stretch_limit, 0.0).max(0.0);
    let stops = scaled_stops(fractions, limit);
    interpolate_clamped(distance, &stops, values).clamp(0.0, 1.0)
}
