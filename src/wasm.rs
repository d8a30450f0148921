//! JS bindings for the animation driver
//!
//! Flat numeric signatures so the driver can call straight from its frame
//! callback with live (x, y, r) values.

use wasm_bindgen::prelude::*;

use crate::geometry::{
    BridgePhase, BridgeState, Circle, compute_bridge_opacity, compute_curvature_spread,
    compute_neck_radius, get_metaball_path,
};

/// Install logging and the panic hook; call once at startup
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Liquid bridge geometry ready");
    }
}

#[wasm_bindgen(js_name = computeNeckRadius)]
pub fn neck_radius(base_radius: f32, distance: f32, max_stretch: f32) -> f32 {
    compute_neck_radius(base_radius, distance, max_stretch)
}

#[wasm_bindgen(js_name = computeCurvatureSpread)]
pub fn curvature_spread(
    distance: f32,
    max_stretch: f32,
    neck_radius: f32,
    base_radius: f32,
) -> f32 {
    compute_curvature_spread(distance, max_stretch, neck_radius, base_radius)
}

/// Physics outline as SVG path data ("" when there is no bridge)
#[wasm_bindgen(js_name = getMetaballPath)]
pub fn metaball_path(
    x1: f32,
    y1: f32,
    r1: f32,
    x2: f32,
    y2: f32,
    r2: f32,
    stretch_limit: f32,
) -> String {
    get_metaball_path(x1, y1, r1, x2, y2, r2, stretch_limit)
}

/// Simple outline as SVG path data ("" when there is no bridge)
#[wasm_bindgen(js_name = getSimpleMetaballPath)]
pub fn simple_metaball_path(
    x1: f32,
    y1: f32,
    r1: f32,
    x2: f32,
    y2: f32,
    r2: f32,
    stretch_limit: f32,
) -> String {
    crate::geometry::simple_metaball_path(
        Circle::new(x1, y1, r1),
        Circle::new(x2, y2, r2),
        stretch_limit,
    )
    .to_svg()
}

/// Opacity for "merge" or "bud"; unknown phases use merge
#[wasm_bindgen(js_name = computeBridgeOpacity)]
pub fn bridge_opacity(distance: f32, stretch_limit: f32, phase: &str) -> f32 {
    let phase = BridgePhase::from_str(phase).unwrap_or_default();
    compute_bridge_opacity(distance, stretch_limit, phase)
}

/// "contact", "stretching" or "ruptured"
#[wasm_bindgen(js_name = bridgeState)]
pub fn bridge_state(distance: f32, stretch_limit: f32) -> String {
    BridgeState::classify(distance, stretch_limit).as_str().to_string()
}
