use boing_core::constants::*;
use boing_core::curve::*;
use glam::DVec2;

#[test]
fn test_bezier_hits_endpoints_exactly() {
    let p0 = DVec2::new(0.0, 0.0);
    let p2 = DVec2::new(100.0, 0.0);
    let p1 = control_point(p0, p2);
    assert_eq!(p1, DVec2::new(50.0, 0.0));
    assert_eq!(bezier_point(p0, p1, p2, 0.0), p0);
    assert_eq!(bezier_point(p0, p1, p2, 1.0), p2);
}

#[test]
fn test_control_point_leaves_wall_horizontally() {
    let anchor = DVec2::new(17.0, 200.0);
    assert_eq!(
        control_point(anchor, DVec2::new(417.0, 200.0)),
        anchor + DVec2::new(BEND_STIFFNESS, 0.0)
    );
    assert_eq!(
        control_point(anchor, DVec2::new(17.0, 300.0)),
        anchor + DVec2::new(50.0, 0.0)
    );
}

#[test]
fn test_tangent_at_ends() {
    let p0 = DVec2::ZERO;
    let p1 = DVec2::new(50.0, 0.0);
    let p2 = DVec2::new(100.0, 100.0);
    assert_eq!(bezier_tangent(p0, p1, p2, 0.0), DVec2::new(100.0, 0.0));
    assert_eq!(bezier_tangent(p0, p1, p2, 1.0), DVec2::new(100.0, 200.0));
}

#[test]
fn test_unit_normal() {
    let n = unit_normal(DVec2::new(3.0, 4.0)).unwrap();
    assert!((n.length() - 1.0).abs() < 1e-12);
    assert!(n.dot(DVec2::new(3.0, 4.0)).abs() < 1e-12);
    assert!(unit_normal(DVec2::ZERO).is_none());
    assert!(unit_normal(DVec2::new(f64::NAN, 1.0)).is_none());
}

#[test]
fn test_path_spans_anchor_to_knob() {
    let anchor = DVec2::new(17.0, 200.0);
    let knob = DVec2::new(267.0, 200.0);
    let path = spring_path(anchor, knob, 250.0);
    assert_eq!(path.len(), CURVE_SEGMENTS + 1);
    assert_eq!(path[0], anchor);
    assert!(path[CURVE_SEGMENTS].distance(knob) < 1e-9);
}

#[test]
fn test_path_coils_around_centerline() {
    let anchor = DVec2::new(17.0, 200.0);
    let knob = DVec2::new(267.0, 200.0);
    let path = spring_path(anchor, knob, 250.0);
    let max_off = path.iter().map(|p| (p.y - 200.0).abs()).fold(0.0, f64::max);
    assert!(max_off > COIL_WIDTH * 0.5);
    assert!(max_off <= COIL_WIDTH * COIL_TAPER + 1e-9);
}

#[test]
fn test_degenerate_path_stays_finite() {
    let anchor = DVec2::new(17.0, 200.0);
    let path = spring_path(anchor, anchor, 250.0);
    assert_eq!(path.len(), CURVE_SEGMENTS + 1);
    assert!(path.iter().all(|p| p.is_finite() && p.distance(anchor) < 1e-9));
}

#[test]
fn test_coils_taper_toward_knob() {
    assert!((coil_width(0.0, 250.0, 250.0) - 30.0).abs() < 1e-9);
    assert!((coil_width(1.0, 250.0, 250.0) - 5.0).abs() < 1e-9);
}

#[test]
fn test_coils_bulge_when_compressed() {
    let relaxed = coil_width(0.5, 250.0, 250.0);
    assert!((relaxed - 17.5).abs() < 1e-9);
    assert!((coil_width(0.5, 125.0, 250.0) - 26.25).abs() < 1e-9);
    assert_eq!(coil_width(0.5, 400.0, 250.0), relaxed);
}
