use crate::constants::{MAX_FRAME_DELTA_MS, MAX_SUBSTEP_MS};

/// Per-frame elapsed time, clamped so a suspended tab doesn't produce one
/// huge catch-up step.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call, in `0..=MAX_FRAME_DELTA_MS`.
    /// The first call returns 0.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        let delta = now_ms - last;
        if delta.is_finite() {
            delta.clamp(0.0, MAX_FRAME_DELTA_MS)
        } else {
            0.0
        }
    }
}

/// Split `delta_ms` into equal sub-steps no longer than `MAX_SUBSTEP_MS`.
/// Returns `(count, size_ms)`; a non-positive delta yields no steps.
pub fn substeps(delta_ms: f64) -> (usize, f64) {
    if !(delta_ms.is_finite() && delta_ms > 0.0) {
        return (0, 0.0);
    }
    let count = (delta_ms / MAX_SUBSTEP_MS).ceil().max(1.0) as usize;
    (count, delta_ms / count as f64)
}

/// Fires once every `period_ms` of accumulated frame time.
#[derive(Clone, Debug)]
pub struct Interval {
    period_ms: f64,
    elapsed_ms: f64,
}

impl Interval {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Start a period that is already due on the next tick.
    pub fn due_now(period_ms: f64) -> Self {
        Self {
            period_ms,
            elapsed_ms: period_ms,
        }
    }

    pub fn tick(&mut self, delta_ms: f64) -> bool {
        self.elapsed_ms += delta_ms.max(0.0);
        if self.elapsed_ms >= self.period_ms {
            self.elapsed_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}
