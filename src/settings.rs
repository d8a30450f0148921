//! Bridge rendering settings and preferences
//!
//! Persisted by the host as JSON (LocalStorage on web, a file on native).

use serde::{Deserialize, Serialize};

use crate::geometry::{
    BridgePath, BridgePhase, BridgeState, Circle, compute_bridge_opacity,
    physics_metaball_path_with, simple_metaball_path,
};
use crate::tuning::BridgeTuning;

/// Which outline generator to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Fidelity {
    /// Linear, non-necking outline
    Simple,
    /// Necked outline with curvature-shaped walls
    #[default]
    Physics,
}

impl Fidelity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fidelity::Simple => "Simple",
            Fidelity::Physics => "Physics",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" | "low" => Some(Fidelity::Simple),
            "physics" | "high" => Some(Fidelity::Physics),
            _ => None,
        }
    }
}

/// Bridge settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Outline generator
    pub fidelity: Fidelity,
    /// Draw bridges at all
    pub bridge_enabled: bool,

    // === Accessibility ===
    /// Reduced motion (simple outlines, no fading bridge)
    pub reduced_motion: bool,

    /// Curve-shaping overrides for the physics outline
    pub tuning: BridgeTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fidelity: Fidelity::Physics,
            bridge_enabled: true,
            reduced_motion: false,
            tuning: BridgeTuning::DEFAULT,
        }
    }
}

impl Settings {
    /// Create settings with a given fidelity
    pub fn from_fidelity(fidelity: Fidelity) -> Self {
        Self {
            fidelity,
            ..Self::default()
        }
    }

    /// Effective fidelity (respects reduced_motion)
    pub fn effective_fidelity(&self) -> Fidelity {
        if self.reduced_motion {
            Fidelity::Simple
        } else {
            self.fidelity
        }
    }

    /// Outline for this frame, empty when disabled or ruptured
    pub fn bridge_path(&self, a: Circle, b: Circle, stretch_limit: f32) -> BridgePath {
        if !self.bridge_enabled {
            return BridgePath::empty();
        }
        match self.effective_fidelity() {
            Fidelity::Simple => simple_metaball_path(a, b, stretch_limit),
            Fidelity::Physics => physics_metaball_path_with(&self.tuning, a, b, stretch_limit),
        }
    }

    /// Opacity for this frame
    ///
    /// Reduced motion keeps a steady bridge instead of the phase fade.
    pub fn bridge_opacity(&self, distance: f32, stretch_limit: f32, phase: BridgePhase) -> f32 {
        if !self.bridge_enabled {
            return 0.0;
        }
        if self.reduced_motion {
            let drawn = BridgeState::classify(distance, stretch_limit).has_path();
            return if drawn { 1.0 } else { 0.0 };
        }
        compute_bridge_opacity(distance, stretch_limit, phase)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.tuning = settings.tuning.sanitized();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from stored JSON, falling back to defaults
    pub fn load(stored: Option<&str>) -> Self {
        if let Some(json) = stored {
            match Self::from_json(json) {
                Ok(settings) => {
                    log::info!("Loaded bridge settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring invalid bridge settings: {}", e),
            }
        }

        log::info!("Using default bridge settings");
        Self::default()
    }

    /// Serialize for the host to store; None if serialization fails
    pub fn save(&self) -> Option<String> {
        match self.to_json() {
            Ok(json) => {
                log::info!("Bridge settings saved");
                Some(json)
            }
            Err(e) => {
                log::error!("Failed to serialize bridge settings: {}", e);
                None
            }
        }
    }
}
