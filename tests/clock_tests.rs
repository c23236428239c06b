use boing_core::constants::MAX_FRAME_DELTA_MS;
use boing_core::{substeps, FrameClock, Interval};

#[test]
fn test_first_frame_has_no_delta() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.advance(1234.0), 0.0);
    assert_eq!(clock.advance(1250.0), 16.0);
}

#[test]
fn test_long_gaps_are_clamped() {
    let mut clock = FrameClock::new();
    clock.advance(0.0);
    assert_eq!(clock.advance(5000.0), MAX_FRAME_DELTA_MS);
    assert_eq!(clock.advance(4000.0), 0.0);
    assert_eq!(clock.advance(f64::NAN), 0.0);
}

#[test]
fn test_substeps_are_equal_and_short() {
    assert_eq!(substeps(16.0), (1, 16.0));
    assert_eq!(substeps(16.5), (2, 8.25));
    assert_eq!(substeps(50.0), (4, 12.5));
    assert_eq!(substeps(1.0), (1, 1.0));
}

#[test]
fn test_no_substeps_without_time() {
    assert_eq!(substeps(0.0), (0, 0.0));
    assert_eq!(substeps(-3.0), (0, 0.0));
    assert_eq!(substeps(f64::INFINITY), (0, 0.0));
}

#[test]
fn test_interval_fires_each_period() {
    let mut poll = Interval::new(100.0);
    assert!(!poll.tick(60.0));
    assert!(poll.tick(40.0));
    assert!(!poll.tick(99.0));
    poll.reset();
    assert!(!poll.tick(99.0));
    assert!(poll.tick(1.0));
}

#[test]
fn test_interval_due_now() {
    let mut poll = Interval::due_now(15_000.0);
    assert!(poll.tick(0.0));
    assert!(!poll.tick(16.0));
}
