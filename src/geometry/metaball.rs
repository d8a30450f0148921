//! Metaball bridge outlines between two circles
//!
//! Both variants work in a local frame: unit axis `u` from circle 1 to
//! circle 2, normal `n`, midpoint `m`. Side `+1` walls run along `+n`,
//! side `-1` along `-n`.
//!
//! `n` is the left normal of the axis taken from the lexicographically
//! smaller center to the larger one, so it does not depend on argument
//! order. Swapping the circles reverses `u` but keeps `n`, which traces the
//! same outline in the opposite direction.
//!
//! ```text
//!        p1 ___          ___ p3
//!       /      \________/      \
//!  c1  (        waist (m)       )  c2
//!       \___   ________   _____/
//!        p2    \      /       p4
//! ```
//!
//! The physics variant necks both circles and shapes the walls with two cubic
//! segments each, meeting tangentially at the pinched waist. The simple
//! variant uses full radii and a single quadratic per wall.

use glam::Vec2;

use super::circle::Circle;
use super::neck::{compute_curvature_spread_with, compute_neck_radius_with, stretch_ratio};
use super::path::BridgePath;
use crate::finite_or;
use crate::tuning::BridgeTuning;

/// Command count of a physics outline: M, 2 x (C, C), L, Z
const PHYSICS_COMMANDS: usize = 7;
/// Command count of a simple outline: M, Q, L, Q, Z
const SIMPLE_COMMANDS: usize = 5;

/// Local frame shared by both variants
#[derive(Debug, Clone, Copy)]
struct BridgeFrame {
    axis: Vec2,
    normal: Vec2,
    mid: Vec2,
    distance: f32,
}

impl BridgeFrame {
    /// None when the circles coincide or the bridge has ruptured
    fn new(a: &Circle, b: &Circle, stretch_limit: f32) -> Option<Self> {
        let distance = a.distance_to(b);
        let limit = finite_or(stretch_limit, 0.0);
        if !(distance > 0.0) || !distance.is_finite() || distance > limit {
            return None;
        }
        let axis = crate::unit_from_angle(a.angle_to(b));
        let ordered = (a.center.x, a.center.y) <= (b.center.x, b.center.y);
        let normal = if ordered { axis.perp() } else { -axis.perp() };
        Some(Self {
            axis,
            normal,
            mid: (a.center + b.center) * 0.5,
            distance,
        })
    }
}

/// Physics outline with the default tuning
pub fn physics_metaball_path(a: Circle, b: Circle, stretch_limit: f32) -> BridgePath {
    physics_metaball_path_with(&BridgeTuning::DEFAULT, a, b, stretch_limit)
}

pub fn physics_metaball_path_with(
    tuning: &BridgeTuning,
    a: Circle,
    b: Circle,
    stretch_limit: f32,
) -> BridgePath {
    let (a, b) = (a.sanitized(), b.sanitized());
    let Some(frame) = BridgeFrame::new(&a, &b, stretch_limit) else {
        return BridgePath::empty();
    };
    let d = frame.distance;

    let neck_a = compute_neck_radius_with(tuning, a.r, d, stretch_limit);
    let neck_b = compute_neck_radius_with(tuning, b.r, d, stretch_limit);
    let waist = tuning.waist_scale * neck_a.min(neck_b);

    let spread = compute_curvature_spread_with(
        tuning,
        d,
        stretch_limit,
        (neck_a + neck_b) * 0.5,
        (a.r + b.r) * 0.5,
    );
    let handle = d * spread;

    let mut path = BridgePath::with_capacity(PHYSICS_COMMANDS);
    path.move_to(a.point_along(frame.normal, neck_a));
    physics_wall(
        &mut path,
        tuning,
        &frame,
        (a.center, neck_a),
        (b.center, neck_b),
        waist,
        handle,
        1.0,
    );
    path.line_to(b.point_along(-frame.normal, neck_b));
    physics_wall(
        &mut path,
        tuning,
        &frame,
        (b.center, neck_b),
        (a.center, neck_a),
        waist,
        handle,
        -1.0,
    );
    path.close();
    path
}

/// Append one wall (two cubic segments through the waist) from `from` to `to`.
///
/// `side` selects the wall; walking the `-1` side runs from circle 2 back to
/// circle 1, so the axis direction flips with it.
#[allow(clippy::too_many_arguments)]
fn physics_wall(
    path: &mut BridgePath,
    tuning: &BridgeTuning,
    frame: &BridgeFrame,
    from: (Vec2, f32),
    to: (Vec2, f32),
    waist: f32,
    handle: f32,
    side: f32,
) {
    let dir = frame.axis * side;
    let n = frame.normal * side;
    let (from_center, from_r) = from;
    let (to_center, to_r) = to;

    let waist_point = frame.mid + n * waist;
    let waist_handle = dir * (handle * tuning.handle_blend);

    let leave = from_center + n * crate::lerp(from_r, waist, tuning.wall_blend) + dir * handle;
    path.cubic_to(leave, waist_point - waist_handle, waist_point);

    let arrive = to_center + n * crate::lerp(to_r, waist, tuning.wall_blend) - dir * handle;
    path.cubic_to(waist_point + waist_handle, arrive, to_center + n * to_r);
}

/// Physics outline as SVG path data from flat coordinates
///
/// Returns an empty string when the circles coincide or are farther apart
/// than `stretch_limit`.
pub fn get_metaball_path(
    x1: f32,
    y1: f32,
    r1: f32,
    x2: f32,
    y2: f32,
    r2: f32,
    stretch_limit: f32,
) -> String {
    physics_metaball_path(Circle::new(x1, y1, r1), Circle::new(x2, y2, r2), stretch_limit).to_svg()
}

/// Low-fidelity outline: full radii, no necking, one quadratic per wall
///
/// The wall control point slides linearly toward the axis as the bridge
/// stretches, so the walls flatten into a pinch just before rupture.
pub fn simple_metaball_path(a: Circle, b: Circle, stretch_limit: f32) -> BridgePath {
    let (a, b) = (a.sanitized(), b.sanitized());
    let Some(frame) = BridgeFrame::new(&a, &b, stretch_limit) else {
        return BridgePath::empty();
    };

    let stretch = stretch_ratio(frame.distance, stretch_limit);
    let bulge = (a.r + b.r) * 0.5 * (1.0 - stretch);
    let n = frame.normal;

    let mut path = BridgePath::with_capacity(SIMPLE_COMMANDS);
    path.move_to(a.point_along(n, a.r))
        .quad_to(frame.mid + n * bulge, b.point_along(n, b.r))
        .line_to(b.point_along(-n, b.r))
        .quad_to(frame.mid - n * bulge, a.point_along(-n, a.r))
        .close();
    path
}
