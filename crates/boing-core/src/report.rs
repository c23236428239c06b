//! Collaborator capabilities: boing reporting, the global count, and local
//! counter persistence. Implementations live with the platform; everything
//! here is synchronous and never blocks the frame loop.

use crate::interaction::BoingEvent;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored count is not a number: {0:?}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Fire-and-forget reporting of boings to a remote service.
pub trait Reporter {
    /// Send one boing. Failures are swallowed by the implementation.
    fn report(&self, event: &BoingEvent);
    /// Start a refresh of the global count; the result lands later.
    fn refresh_count(&self);
    /// Last known global count, `None` while unknown.
    fn latest_count(&self) -> Option<u64>;
}

/// Reporter used when no service is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: &BoingEvent) {}
    fn refresh_count(&self) {}
    fn latest_count(&self) -> Option<u64> {
        None
    }
}

/// Shared last-write-wins slot for the global count. Clones share storage,
/// so an async response can fill the slot the frame loop reads.
#[derive(Clone, Debug, Default)]
pub struct GlobalCount(Rc<Cell<Option<u64>>>);

impl GlobalCount {
    pub fn get(&self) -> Option<u64> {
        self.0.get()
    }

    pub fn set(&self, count: u64) {
        self.0.set(Some(count));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoingReport {
    pub angle: f64,
    pub dist_ratio: f64,
}

impl From<&BoingEvent> for BoingReport {
    fn from(event: &BoingEvent) -> Self {
        Self {
            angle: event.angle,
            dist_ratio: event.distance_ratio,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

pub fn encode_report(event: &BoingEvent) -> Result<String, ReportError> {
    serde_json::to_string(&BoingReport::from(event)).map_err(|e| ReportError::Encode(e.to_string()))
}

pub fn parse_count(body: &str) -> Result<u64, ReportError> {
    serde_json::from_str::<CountResponse>(body)
        .map(|r| r.count)
        .map_err(|e| ReportError::Decode(e.to_string()))
}

#[inline]
pub fn report_url(base: &str) -> String {
    format!("{}/boing", base.trim_end_matches('/'))
}

#[inline]
pub fn count_url(base: &str) -> String {
    format!("{}/count", base.trim_end_matches('/'))
}

/// Heatmap image URL; `stamp` busts caches between refreshes.
pub fn heatmap_url(base: &str, width: f64, height: f64, rest_length: f64, stamp: u64) -> String {
    format!(
        "{}/heatmap?w={}&h={}&r={}&t={}",
        base.trim_end_matches('/'),
        width.round() as i64,
        height.round() as i64,
        rest_length.round() as i64,
        stamp
    )
}

/// Key-value persistence of the local boing count.
pub trait CounterStore {
    fn load(&self) -> Result<Option<u64>, StoreError>;
    fn save(&self, count: u64) -> Result<(), StoreError>;
}

/// In-memory store, used when the platform has no persistent storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<Cell<Option<u64>>>);

impl CounterStore for MemoryStore {
    fn load(&self) -> Result<Option<u64>, StoreError> {
        Ok(self.0.get())
    }

    fn save(&self, count: u64) -> Result<(), StoreError> {
        self.0.set(Some(count));
        Ok(())
    }
}

/// "Times boinged" counter, saved on every increment.
pub struct BoingCounter {
    count: u64,
    store: Box<dyn CounterStore>,
}

impl BoingCounter {
    pub fn load(store: Box<dyn CounterStore>) -> Self {
        let count = match store.load() {
            Ok(c) => c.unwrap_or(0),
            Err(e) => {
                log::warn!("[store] could not load boing count: {}", e);
                0
            }
        };
        Self { count, store }
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        if let Err(e) = self.store.save(self.count) {
            log::warn!("[store] could not save boing count: {}", e);
        }
        self.count
    }
}
