use boing_core::constants::*;
use boing_core::resist::resist;
use boing_core::{substep, time_scale, Drive, Layout, SpringParams, SpringState};
use glam::DVec2;

#[test]
fn test_resist_is_zero_at_rest() {
    assert_eq!(resist(0.0, PULL_LIMIT, PUSH_LIMIT), 0.0);
}

#[test]
fn test_resist_halves_at_limit() {
    assert!((resist(300.0, 300.0, 400.0) - 150.0).abs() < 1e-9);
    assert!((resist(-400.0, 300.0, 400.0) + 200.0).abs() < 1e-9);
}

#[test]
fn test_resist_is_monotonic_and_bounded() {
    let mut prev = f64::NEG_INFINITY;
    for i in -2000..=2000 {
        let x = i as f64 * 5.0;
        let r = resist(x, PULL_LIMIT, PUSH_LIMIT);
        assert!(r > prev, "not increasing at {}", x);
        assert!(r < PULL_LIMIT && r > -PUSH_LIMIT);
        prev = r;
    }
}

#[test]
fn test_resist_approaches_limits() {
    assert!(resist(1e9, PULL_LIMIT, PUSH_LIMIT) > PULL_LIMIT - 0.01);
    assert!(resist(-1e9, PULL_LIMIT, PUSH_LIMIT) < -PUSH_LIMIT + 0.01);
}

#[test]
fn test_resist_is_linear_near_rest() {
    let r = resist(0.01, PULL_LIMIT, PUSH_LIMIT);
    assert!((r - 0.01).abs() < 1e-6);
}

#[test]
fn test_layout_from_desktop_canvas() {
    let layout = Layout::from_canvas(600.0, 400.0);
    assert_eq!(layout.anchor, DVec2::new(17.0, 200.0));
    assert_eq!(layout.rest_length, 250.0);
    assert_eq!(layout.rest_knob(), DVec2::new(267.0, 200.0));
}

#[test]
fn test_layout_rest_length_scales_with_narrow_canvas() {
    let layout = Layout::from_canvas(217.0, 400.0);
    assert_eq!(layout.rest_length, 100.0);
    let tiny = Layout::from_canvas(20.0, 400.0);
    assert_eq!(tiny.rest_length, KNOB_RADIUS);
}

#[test]
fn test_rest_is_a_fixed_point() {
    let layout = Layout::from_canvas(600.0, 400.0);
    let params = SpringParams::default();
    let mut state = SpringState::at_rest(layout.rest_length);
    let ts = time_scale(16.0, false);
    for _ in 0..1000 {
        let knob = substep(&mut state, &layout, &params, Drive::Free, ts);
        assert_eq!(knob, layout.rest_knob());
    }
    assert_eq!(state, SpringState::at_rest(layout.rest_length));
}

#[test]
fn test_released_spring_settles_to_rest() {
    let layout = Layout::from_canvas(600.0, 400.0);
    let params = SpringParams::default();
    let mut state = SpringState {
        length: 400.0,
        angle: 0.6,
        length_velocity: 0.0,
        angular_velocity: 0.0,
    };
    let ts = time_scale(16.0, false);
    let mut knob = DVec2::ZERO;
    for _ in 0..2000 {
        knob = substep(&mut state, &layout, &params, Drive::Free, ts);
    }
    assert!((state.length - layout.rest_length).abs() < 1e-6);
    assert!(state.angle.abs() < 1e-6);
    assert!(knob.distance(layout.rest_knob()) < 1e-4);
}

fn run_free(mut state: SpringState, steps: usize, step_ms: f64) -> SpringState {
    let layout = Layout::from_canvas(600.0, 400.0);
    let params = SpringParams::default();
    let ts = time_scale(step_ms, false);
    for _ in 0..steps {
        substep(&mut state, &layout, &params, Drive::Free, ts);
    }
    state
}

#[test]
fn test_substep_size_barely_changes_mid_swing() {
    let start = SpringState {
        length: 265.0,
        angle: 0.3,
        length_velocity: 0.0,
        angular_velocity: 0.0,
    };
    // 500 ms either way. The step is first order, so 16 ms and 8 ms
    // sub-steps drift apart by a few hundredths while still swinging.
    let coarse = run_free(start, 32, 16.0);
    let fine = run_free(start, 64, 8.0);
    assert!((coarse.length - fine.length).abs() < 0.1);
    assert!((coarse.angle - fine.angle).abs() < 0.1);
    assert!((coarse.length - 250.0).abs() < 15.0);
}

#[test]
fn test_substep_size_does_not_change_settled_state() {
    let start = SpringState {
        length: 265.0,
        angle: 0.3,
        length_velocity: 0.0,
        angular_velocity: 0.0,
    };
    let coarse = run_free(start, 320, 15.625);
    let fine = run_free(start, 640, 7.8125);
    assert!((coarse.length - fine.length).abs() < 1e-3);
    assert!((coarse.angle - fine.angle).abs() < 1e-3);
}

#[test]
fn test_slomo_slows_time_uniformly() {
    assert!((time_scale(TARGET_FRAME_MS, false) - 1.0).abs() < 1e-12);
    assert!((time_scale(TARGET_FRAME_MS, true) - 0.25).abs() < 1e-12);
}

#[test]
fn test_divergence_resets_to_rest() {
    let layout = Layout::from_canvas(600.0, 400.0);
    let params = SpringParams::default();
    let mut state = SpringState {
        length: 250.0,
        angle: 0.0,
        length_velocity: 1e7,
        angular_velocity: 0.0,
    };
    let knob = substep(&mut state, &layout, &params, Drive::Free, 1.0);
    assert_eq!(state, SpringState::at_rest(layout.rest_length));
    assert_eq!(knob, layout.rest_knob());
}

#[test]
fn test_nan_state_resets_to_rest() {
    let layout = Layout::from_canvas(600.0, 400.0);
    let params = SpringParams::default();
    let mut state = SpringState {
        length: 250.0,
        angle: f64::NAN,
        length_velocity: 0.0,
        angular_velocity: 0.0,
    };
    let knob = substep(&mut state, &layout, &params, Drive::Free, 1.0);
    assert_eq!(state, SpringState::at_rest(layout.rest_length));
    assert_eq!(knob, layout.rest_knob());
}

#[test]
fn test_check_reports_field() {
    let state = SpringState {
        length: 250.0,
        angle: 0.0,
        length_velocity: 0.0,
        angular_velocity: -2000.0,
    };
    let err = state.check().unwrap_err();
    assert_eq!(err.field, "angular_velocity");
    assert_eq!(err.to_string(), "angular_velocity = -2000");
}

#[test]
fn test_drag_follows_resisted_pull() {
    let layout = Layout::from_canvas(600.0, 400.0);
    let params = SpringParams::default();
    let mut state = SpringState::at_rest(layout.rest_length);
    let raw = 15.0 / (1.0 - 15.0 / PULL_LIMIT);
    let knob = state.drag_toward(DVec2::new(250.0 + raw, 0.0), &layout, &params);
    assert!((knob.x - 282.0).abs() < 1e-9);
    assert!((state.length - 265.0).abs() < 1e-9);
    assert_eq!(state.length_velocity, 0.0);
    assert_eq!(state.angular_velocity, 0.0);
}

#[test]
fn test_drag_push_has_minimum_length() {
    let layout = Layout::from_canvas(57.0, 400.0);
    assert_eq!(layout.rest_length, 20.0);
    let params = SpringParams::default();
    let mut state = SpringState::at_rest(layout.rest_length);
    let knob = state.drag_toward(DVec2::new(1.0, 0.0), &layout, &params);
    assert!((state.length - MIN_DRAG_DISTANCE).abs() < 1e-9);
    assert!((knob.x - (layout.anchor.x + MIN_DRAG_DISTANCE)).abs() < 1e-9);
}

#[test]
fn test_drag_behind_wall_is_clamped() {
    let layout = Layout::from_canvas(600.0, 400.0);
    let params = SpringParams::default();
    let mut state = SpringState::at_rest(layout.rest_length);
    let knob = state.drag_toward(DVec2::new(-100.0, 50.0), &layout, &params);
    assert_eq!(knob.x, layout.min_knob_x());
    assert!(knob.y > layout.anchor.y);
    assert!(state.length >= KNOB_RADIUS);
    let rebuilt = state.knob(layout.anchor);
    assert!(rebuilt.distance(knob) < 1e-9);
}

#[test]
fn test_spring_back_keeps_knob_off_wall() {
    let layout = Layout::from_canvas(600.0, 400.0);
    let params = SpringParams::default();
    let mut state = SpringState {
        length: 20.0,
        angle: 0.0,
        length_velocity: -500.0,
        angular_velocity: 0.0,
    };
    let knob = substep(&mut state, &layout, &params, Drive::Free, 1.0);
    assert!(state.length >= KNOB_RADIUS);
    assert!(knob.x >= layout.min_knob_x());
}
