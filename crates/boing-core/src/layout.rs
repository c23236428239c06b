use crate::constants::{KNOB_RADIUS, MAX_REST_LENGTH, REST_FRACTION, WALL_WIDTH};
use glam::DVec2;

/// Canvas-derived geometry: where the spring is anchored and how long it is
/// when relaxed. Rebuilt from scratch on every canvas resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub anchor: DVec2,
    pub rest_length: f64,
}

impl Layout {
    pub fn from_canvas(width: f64, height: f64) -> Self {
        let anchor = DVec2::new(WALL_WIDTH, height * 0.5);
        let rest_length = ((width - WALL_WIDTH) * REST_FRACTION)
            .min(MAX_REST_LENGTH)
            .max(KNOB_RADIUS);
        Self {
            width,
            height,
            anchor,
            rest_length,
        }
    }

    /// Knob position of a relaxed spring.
    #[inline]
    pub fn rest_knob(&self) -> DVec2 {
        self.anchor + DVec2::new(self.rest_length, 0.0)
    }

    /// Smallest knob x that keeps the knob clear of the wall.
    #[inline]
    pub fn min_knob_x(&self) -> f64 {
        self.anchor.x + KNOB_RADIUS
    }
}
