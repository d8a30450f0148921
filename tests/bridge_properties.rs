//! Property tests for the bridge geometry

use glam::Vec2;
use liquid_bridge::{
    BridgePhase, BridgeState, Circle, compute_bridge_opacity, compute_curvature_spread,
    compute_neck_radius, physics_metaball_path, simple_metaball_path,
};
use proptest::prelude::*;

fn phase() -> impl Strategy<Value = BridgePhase> {
    prop_oneof![Just(BridgePhase::Merge), Just(BridgePhase::Bud)]
}

/// Every point of `a` has a counterpart in `b` within `tol`, and vice versa
fn same_point_set(a: &[Vec2], b: &[Vec2], tol: f32) -> bool {
    let covered = |from: &[Vec2], to: &[Vec2]| {
        from.iter().all(|p| to.iter().any(|q| p.distance(*q) < tol))
    };
    a.len() == b.len() && covered(a, b) && covered(b, a)
}

proptest! {
    #[test]
    fn neck_is_bounded_and_non_increasing(
        r in 0.5f32..200.0,
        d1 in 0.0f32..500.0,
        d2 in 0.0f32..500.0,
        limit in 1.0f32..400.0,
    ) {
        let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let n_near = compute_neck_radius(r, near, limit);
        let n_far = compute_neck_radius(r, far, limit);
        prop_assert!(n_far <= n_near + 1e-4);
        for n in [n_near, n_far] {
            prop_assert!(n >= 0.08 * r - 1e-4 && n <= r + 1e-4);
        }
    }

    #[test]
    fn spread_stays_in_range(
        d in 0.0f32..500.0,
        limit in 1.0f32..400.0,
        neck in 0.0f32..100.0,
        base in 0.0f32..100.0,
    ) {
        let s = compute_curvature_spread(d, limit, neck, base);
        prop_assert!((0.05 - 1e-6..=0.5 + 1e-6).contains(&s), "spread = {}", s);
    }

    #[test]
    fn opacity_stays_in_unit_interval(
        d in 0.0f32..1000.0,
        limit in 0.001f32..500.0,
        phase in phase(),
    ) {
        let o = compute_bridge_opacity(d, limit, phase);
        prop_assert!((0.0..=1.0).contains(&o));
    }

    #[test]
    fn opacity_endpoints(limit in 0.001f32..500.0) {
        prop_assert_eq!(compute_bridge_opacity(0.0, limit, BridgePhase::Merge), 1.0);
        prop_assert_eq!(compute_bridge_opacity(limit, limit, BridgePhase::Merge), 0.0);
        prop_assert_eq!(compute_bridge_opacity(0.0, limit, BridgePhase::Bud), 0.0);
        prop_assert_eq!(compute_bridge_opacity(limit, limit, BridgePhase::Bud), 0.0);
    }

    #[test]
    fn rupture_boundary(
        x1 in -300.0f32..300.0,
        y1 in -300.0f32..300.0,
        angle in 0.0f32..std::f32::consts::TAU,
        d in 0.0f32..400.0,
        r1 in 1.0f32..60.0,
        r2 in 1.0f32..60.0,
        limit in 10.0f32..300.0,
    ) {
        let a = Circle::new(x1, y1, r1);
        let b = Circle::new(x1 + d * angle.cos(), y1 + d * angle.sin(), r2);
        let actual = a.distance_to(&b);

        let physics = physics_metaball_path(a, b, limit);
        let simple = simple_metaball_path(a, b, limit);
        let state = BridgeState::classify(actual, limit);

        let expect_path = actual > 0.0 && actual <= limit;
        prop_assert_eq!(!physics.is_empty(), expect_path);
        prop_assert_eq!(!simple.is_empty(), expect_path);
        prop_assert_eq!(state.has_path(), expect_path);
        prop_assert!(!physics.to_svg().contains("NaN"));
    }

    #[test]
    fn swapping_circles_traces_same_outline(
        x2 in 5.0f32..140.0,
        y2 in -40.0f32..40.0,
        r1 in 2.0f32..40.0,
        r2 in 2.0f32..40.0,
    ) {
        let a = Circle::new(0.0, 0.0, r1);
        let b = Circle::new(x2, y2, r2);
        let limit = 150.0;

        let forward = physics_metaball_path(a, b, limit);
        let swapped = physics_metaball_path(b, a, limit);
        prop_assert!(!forward.is_empty());

        prop_assert!(same_point_set(&forward.anchor_points(), &swapped.anchor_points(), 1e-2));
        prop_assert!(same_point_set(&forward.control_points(), &swapped.control_points(), 1e-2));

        // Same shape traced in the opposite direction
        let forward_area = forward.signed_area(16);
        let swapped_area = swapped.signed_area(16);
        prop_assert!(forward_area * swapped_area < 0.0, "{} vs {}", forward_area, swapped_area);
        prop_assert!(
            (forward_area + swapped_area).abs() <= 1e-2 * forward_area.abs().max(1.0),
            "{} vs {}", forward_area, swapped_area
        );
    }

    #[test]
    fn outline_moves_continuously_with_distance(
        r in 5.0f32..40.0,
        d in 1.0f32..148.0,
    ) {
        let limit = 150.0;
        let step = 0.01;
        let a = Circle::new(0.0, 0.0, r);
        let near = physics_metaball_path(a, Circle::new(d, 0.0, r), limit);
        let far = physics_metaball_path(a, Circle::new(d + step, 0.0, r), limit);

        let points = near
            .anchor_points()
            .into_iter()
            .zip(far.anchor_points())
            .chain(near.control_points().into_iter().zip(far.control_points()));
        for (p, q) in points {
            prop_assert!(p.distance(q) < 0.1, "jump from {} to {}", p, q);
        }
    }
}

#[test]
fn reference_scenario() {
    let a = Circle::new(0.0, 0.0, 20.0);
    let b = Circle::new(100.0, 0.0, 20.0);

    let neck = compute_neck_radius(20.0, 100.0, 150.0);
    assert!((neck - 9.6).abs() < 0.05);
    assert!(neck > 20.0 * 0.08);

    assert!(!physics_metaball_path(a, b, 150.0).is_empty());
    assert!(physics_metaball_path(a, Circle::new(200.0, 0.0, 20.0), 150.0).is_empty());

    let o = compute_bridge_opacity(100.0, 150.0, BridgePhase::Merge);
    assert!(o < 0.85 && o > 0.4);
}
