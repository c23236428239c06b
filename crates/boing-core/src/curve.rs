//! Procedural spring shape.
//!
//! The spring follows a quadratic Bézier from the anchor to the knob whose
//! control point leaves the wall horizontally. Each sample is pushed along
//! the curve normal by a sine wave to draw the coils; the coils taper toward
//! the knob and bulge while the spring is compressed.

use crate::constants::{BEND_STIFFNESS, COIL_COUNT, COIL_TAPER, COIL_WIDTH, CURVE_SEGMENTS};
use glam::DVec2;
use std::f64::consts::TAU;

/// Point on the quadratic Bézier `p0 -> p1 -> p2` at `t`.
#[inline]
pub fn bezier_point(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Derivative of the quadratic Bézier at `t`.
#[inline]
pub fn bezier_tangent(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    (p1 - p0) * (2.0 * (1.0 - t)) + (p2 - p1) * (2.0 * t)
}

/// Unit normal for a tangent, or `None` when the tangent has no direction.
#[inline]
pub fn unit_normal(tangent: DVec2) -> Option<DVec2> {
    let len = tangent.length();
    (len > f64::EPSILON && len.is_finite()).then(|| tangent.perp() / len)
}

/// Control point that keeps the first stretch of spring straight, pulled in
/// when the spring is short so the curve can't loop past the knob.
#[inline]
pub fn control_point(anchor: DVec2, knob: DVec2) -> DVec2 {
    let spring_len = anchor.distance(knob);
    anchor + DVec2::new(BEND_STIFFNESS.min(spring_len * 0.5), 0.0)
}

/// Coil half-width at `t`, widened while the spring is shorter than rest.
#[inline]
pub fn coil_width(t: f64, spring_len: f64, rest_length: f64) -> f64 {
    let width = COIL_WIDTH * (COIL_TAPER - t);
    if spring_len < rest_length && rest_length > 0.0 {
        width * (1.0 + (rest_length - spring_len) / rest_length)
    } else {
        width
    }
}

/// Polyline for the coiled spring, `CURVE_SEGMENTS + 1` points from anchor
/// to knob. Degenerate samples (zero tangent) are left undisplaced.
pub fn spring_path(anchor: DVec2, knob: DVec2, rest_length: f64) -> Vec<DVec2> {
    let p1 = control_point(anchor, knob);
    let spring_len = anchor.distance(knob);
    (0..=CURVE_SEGMENTS)
        .map(|i| {
            let t = i as f64 / CURVE_SEGMENTS as f64;
            let point = bezier_point(anchor, p1, knob, t);
            match unit_normal(bezier_tangent(anchor, p1, knob, t)) {
                Some(normal) => {
                    let wave = (t * COIL_COUNT * TAU).sin();
                    point + normal * (wave * coil_width(t, spring_len, rest_length))
                }
                None => point,
            }
        })
        .collect()
}
