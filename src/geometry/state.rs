//! Bridge lifecycle classification
//!
//! The geometry has no memory between frames. Callers that want to react to
//! transitions (haptics on pinch-off, for example) classify each frame and
//! compare with their own previous value.

use crate::finite_or;

/// Where a bridge sits between contact and rupture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeState {
    /// Centers coincide; nothing to draw
    Contact,
    /// A bridge path exists
    Stretching,
    /// Stretched past the limit; nothing to draw
    Ruptured,
}

impl BridgeState {
    /// Classify a center distance against the stretch limit
    ///
    /// Agrees with the metaball paths: exactly at the limit still draws.
    pub fn classify(distance: f32, stretch_limit: f32) -> Self {
        let limit = finite_or(stretch_limit, 0.0);
        if distance.is_nan() || distance > limit {
            BridgeState::Ruptured
        } else if distance <= 0.0 {
            BridgeState::Contact
        } else {
            BridgeState::Stretching
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeState::Contact => "contact",
            BridgeState::Stretching => "stretching",
            BridgeState::Ruptured => "ruptured",
        }
    }

    /// Whether a bridge outline is drawn in this state
    pub fn has_path(&self) -> bool {
        matches!(self, BridgeState::Stretching)
    }
}
