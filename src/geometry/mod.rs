//! Liquid bridge geometry
//!
//! Everything here is pure and runs once per animation frame:
//! - No hidden state, no I/O, no logging
//! - Output depends only on explicit arguments
//! - Total over numeric input (empty path is the only "no result")

pub mod circle;
pub mod interpolate;
pub mod metaball;
pub mod neck;
pub mod opacity;
pub mod path;
pub mod state;

pub use circle::Circle;
pub use interpolate::interpolate_clamped;
pub use metaball::{
    get_metaball_path, physics_metaball_path, physics_metaball_path_with, simple_metaball_path,
};
pub use neck::{
    compute_curvature_spread, compute_curvature_spread_with, compute_neck_radius,
    compute_neck_radius_with,
};
pub use opacity::{BridgePhase, compute_bridge_opacity};
pub use path::{BridgePath, PathCommand};
pub use state::BridgeState;
