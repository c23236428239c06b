mod support;

use boing_core::constants::*;
use boing_core::*;
use support::{FakeAudio, FakeReporter, Recorder};

fn event(force: f64) -> BoingEvent {
    BoingEvent {
        force_magnitude: force,
        angle: 0.0,
        distance_ratio: 1.06,
    }
}

#[test]
fn test_encode_report_wire_shape() {
    assert_eq!(
        encode_report(&event(15.0)).unwrap(),
        r#"{"angle":0.0,"dist_ratio":1.06}"#
    );
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count(r#"{"count":42}"#).unwrap(), 42);
    assert_eq!(parse_count(r#"{"count": 7, "since": "2024"}"#).unwrap(), 7);
}

#[test]
fn test_parse_count_rejects_garbage() {
    assert!(matches!(parse_count("oops"), Err(ReportError::Decode(_))));
    assert!(matches!(parse_count(r#"{"count":-1}"#), Err(ReportError::Decode(_))));
    assert!(matches!(parse_count("{}"), Err(ReportError::Decode(_))));
}

#[test]
fn test_urls() {
    assert_eq!(report_url("https://boing.example/"), "https://boing.example/boing");
    assert_eq!(count_url(""), "/count");
    assert_eq!(
        heatmap_url("https://boing.example", 583.6, 400.0, 250.0, 9),
        "https://boing.example/heatmap?w=584&h=400&r=250&t=9"
    );
}

#[test]
fn test_audio_cue_scales_with_force() {
    let soft = audio_cue(0.0, false);
    assert!((soft.rate - MIN_RATE).abs() < 1e-12);
    assert!((soft.volume - MIN_VOLUME).abs() < 1e-12);

    let mid = audio_cue(100.0, false);
    assert!((mid.rate - 1.32).abs() < 1e-9);
    assert!((mid.volume - 0.65).abs() < 1e-9);
    assert_eq!(mid.fade_to, FADE_TO_VOLUME);
    assert_eq!(mid.fade_ms, FADE_MS);

    let hard = audio_cue(10_000.0, false);
    assert!((hard.rate - MAX_RATE).abs() < 1e-12);
    assert!((hard.volume - MAX_VOLUME).abs() < 1e-12);
}

#[test]
fn test_audio_cue_in_slomo() {
    let cue = audio_cue(100.0, true);
    assert!((cue.rate - 0.66).abs() < 1e-9);
    assert!((cue.volume - 0.65).abs() < 1e-9);
    assert_eq!(cue.fade_ms, 4800.0);
}

#[test]
fn test_emitter_routes_boing() {
    let rec = Recorder::default();
    let mut emitter = Emitter::new(
        Box::new(FakeAudio(rec.clone())),
        Box::new(FakeReporter(rec.clone())),
        BoingCounter::load(Box::new(MemoryStore::default())),
    );
    let cue = emitter.boing(&event(50.0), false);
    assert_eq!(rec.cues.borrow().as_slice(), &[cue]);
    assert_eq!(rec.reports.borrow().as_slice(), &[event(50.0)]);
    assert_eq!(emitter.local_count(), 1);

    emitter.hush();
    assert_eq!(rec.fades.get(), 1);
}

struct BrokenStore;

impl CounterStore for BrokenStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        Err(StoreError::Corrupt("abc".to_string()))
    }

    fn save(&self, _count: u64) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[test]
fn test_counter_survives_broken_store() {
    let mut counter = BoingCounter::load(Box::new(BrokenStore));
    assert_eq!(counter.count(), 0);
    assert_eq!(counter.increment(), 1);
    assert_eq!(counter.increment(), 2);
}

#[test]
fn test_counter_persists_each_increment() {
    let store = MemoryStore::default();
    let mut counter = BoingCounter::load(Box::new(store.clone()));
    counter.increment();
    counter.increment();
    assert_eq!(store.load().unwrap(), Some(2));
    assert_eq!(BoingCounter::load(Box::new(store)).count(), 2);
}

#[test]
fn test_null_reporter_knows_nothing() {
    let reporter = NullReporter;
    reporter.report(&event(20.0));
    reporter.refresh_count();
    assert_eq!(reporter.latest_count(), None);
}

#[test]
fn test_global_count_clones_share_slot() {
    let slot = GlobalCount::default();
    let writer = slot.clone();
    assert_eq!(slot.get(), None);
    writer.set(99);
    assert_eq!(slot.get(), Some(99));
}
