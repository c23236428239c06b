// Recording stand-ins for the audio, reporting and storage collaborators.

#![allow(dead_code)]
use boing_core::{
    AudioCue, BoingAudio, BoingCounter, BoingEvent, Emitter, GlobalCount, Layout, MemoryStore,
    Reporter, SpringParams, SpringToy,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct Recorder {
    pub cues: Rc<RefCell<Vec<AudioCue>>>,
    pub fades: Rc<Cell<u32>>,
    pub reports: Rc<RefCell<Vec<BoingEvent>>>,
    pub refreshes: Rc<Cell<u32>>,
    pub global: GlobalCount,
}

impl Recorder {
    pub fn boings(&self) -> usize {
        self.reports.borrow().len()
    }
}

pub struct FakeAudio(pub Recorder);

impl BoingAudio for FakeAudio {
    fn play(&mut self, cue: &AudioCue) {
        self.0.cues.borrow_mut().push(*cue);
    }

    fn fade_all(&mut self, _fade_ms: f64) {
        self.0.fades.set(self.0.fades.get() + 1);
    }
}

pub struct FakeReporter(pub Recorder);

impl Reporter for FakeReporter {
    fn report(&self, event: &BoingEvent) {
        self.0.reports.borrow_mut().push(*event);
    }

    fn refresh_count(&self) {
        self.0.refreshes.set(self.0.refreshes.get() + 1);
    }

    fn latest_count(&self) -> Option<u64> {
        self.0.global.get()
    }
}

/// 600x400 canvas: anchor (17, 200), rest length 250.
pub fn desktop_layout() -> Layout {
    Layout::from_canvas(600.0, 400.0)
}

pub fn toy_with(layout: Layout) -> (SpringToy, Recorder, MemoryStore) {
    let rec = Recorder::default();
    let store = MemoryStore::default();
    let emitter = Emitter::new(
        Box::new(FakeAudio(rec.clone())),
        Box::new(FakeReporter(rec.clone())),
        BoingCounter::load(Box::new(store.clone())),
    );
    (
        SpringToy::new(layout, SpringParams::default(), emitter),
        rec,
        store,
    )
}

pub fn toy() -> (SpringToy, Recorder, MemoryStore) {
    toy_with(desktop_layout())
}

/// Raw pull offset that the pull-side resistance curve maps to `resisted`.
pub fn raw_pull_for(resisted: f64, pull_limit: f64) -> f64 {
    resisted / (1.0 - resisted / pull_limit)
}
