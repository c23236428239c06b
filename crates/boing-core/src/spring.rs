//! Polar spring integrator.
//!
//! The knob is a single point mass on a spring anchored to the wall. Its
//! state is kept in polar form (length and angle from the anchor) so the
//! radial and rotational motion spring back independently. Two update paths
//! exist: a kinematic follow while the knob is held and a damped
//! Hooke's-law step when it is free. Both end with a divergence guard.

use crate::constants::*;
use crate::layout::Layout;
use crate::resist::resist;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Tunable coefficients for one spring. `Default` carries the stock values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub friction: f64,
    pub angular_stiffness: f64,
    pub angular_friction: f64,
    pub pull_limit: f64,
    pub push_limit: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            friction: FRICTION,
            angular_stiffness: ANGULAR_STIFFNESS,
            angular_friction: ANGULAR_FRICTION,
            pull_limit: PULL_LIMIT,
            push_limit: PUSH_LIMIT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringState {
    pub length: f64,
    pub angle: f64,
    pub length_velocity: f64,
    pub angular_velocity: f64,
}

/// What moves the knob during one sub-step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drive {
    /// Held: follow this vector from the anchor.
    Drag(DVec2),
    /// Released: spring back toward rest.
    Free,
}

/// The first state field found out of bounds by the divergence guard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Divergence {
    pub field: &'static str,
    pub value: f64,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}

impl SpringState {
    pub fn at_rest(rest_length: f64) -> Self {
        Self {
            length: rest_length,
            angle: 0.0,
            length_velocity: 0.0,
            angular_velocity: 0.0,
        }
    }

    #[inline]
    pub fn knob(&self, anchor: DVec2) -> DVec2 {
        anchor + DVec2::from_angle(self.angle) * self.length
    }

    /// Combined radial and tangential speed of the knob.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.length_velocity.abs() + self.angular_velocity.abs() * self.length
    }

    pub fn check(&self) -> Result<(), Divergence> {
        let fields = [
            ("length", self.length),
            ("angle", self.angle),
            ("length_velocity", self.length_velocity),
            ("angular_velocity", self.angular_velocity),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Divergence { field, value });
        }
        if self.length_velocity.abs() > MAX_LENGTH_VELOCITY {
            return Err(Divergence {
                field: "length_velocity",
                value: self.length_velocity,
            });
        }
        if self.angular_velocity.abs() > MAX_ANGULAR_VELOCITY {
            return Err(Divergence {
                field: "angular_velocity",
                value: self.angular_velocity,
            });
        }
        Ok(())
    }

    /// Kinematic follow of a held knob. `target` is measured from the anchor.
    pub fn drag_toward(&mut self, target: DVec2, layout: &Layout, params: &SpringParams) -> DVec2 {
        // Wall constraint: the target can't go behind the wall
        let target = DVec2::new(target.x.max(0.0), target.y);
        let mouse_dist = target.length();
        let angle = target.y.atan2(target.x);
        let offset = mouse_dist - layout.rest_length;

        let mut new_dist = layout.rest_length + resist(offset, params.pull_limit, params.push_limit);
        if offset <= 0.0 {
            new_dist = new_dist.max(MIN_DRAG_DISTANCE);
        }

        let mut knob = layout.anchor + DVec2::from_angle(angle) * new_dist;
        knob.x = knob.x.max(layout.min_knob_x());

        let rel = knob - layout.anchor;
        self.length = rel.length();
        self.angle = rel.y.atan2(rel.x);
        self.length_velocity = 0.0;
        self.angular_velocity = 0.0;
        knob
    }

    /// One damped spring-back step of `time_scale` nominal frames.
    pub fn spring_back(&mut self, layout: &Layout, params: &SpringParams, time_scale: f64) -> DVec2 {
        self.length_velocity += (layout.rest_length - self.length) * params.stiffness * time_scale;
        self.length_velocity *= params.friction.powf(time_scale);
        self.length += self.length_velocity * time_scale;

        self.angular_velocity += -self.angle * params.angular_stiffness * time_scale;
        self.angular_velocity *= params.angular_friction.powf(time_scale);
        self.angle += self.angular_velocity * time_scale;

        if self.length < KNOB_RADIUS {
            self.length = KNOB_RADIUS;
            self.length_velocity *= BOUNCE;
        }

        let mut knob = self.knob(layout.anchor);
        if knob.x < layout.min_knob_x() {
            knob.x = layout.min_knob_x();
            if self.angle.abs() > FRAC_PI_2 {
                self.angle = self.angle.signum() * PI - self.angle;
                self.angular_velocity *= BOUNCE;
            }
            self.length = (knob - layout.anchor).length();
            self.length_velocity *= BOUNCE;
        }
        knob
    }

    /// Put the spring back at rest with no motion.
    pub fn reset(&mut self, rest_length: f64) {
        *self = Self::at_rest(rest_length);
    }
}

/// Scale factor from a sub-step duration to nominal 60 Hz frames, slowed
/// uniformly while slow motion is on.
#[inline]
pub fn time_scale(substep_ms: f64, slomo: bool) -> f64 {
    let scale = substep_ms / TARGET_FRAME_MS;
    if slomo {
        scale / SLOMO_FACTOR
    } else {
        scale
    }
}

/// Advance the spring by one sub-step and return the new knob position.
///
/// The divergence guard runs after every sub-step; on failure the state is
/// reset to rest and the knob returns to its rest position.
pub fn substep(
    state: &mut SpringState,
    layout: &Layout,
    params: &SpringParams,
    drive: Drive,
    time_scale: f64,
) -> DVec2 {
    let knob = match drive {
        Drive::Drag(target) => state.drag_toward(target, layout, params),
        Drive::Free => state.spring_back(layout, params, time_scale),
    };
    match state.check() {
        Ok(()) if knob.is_finite() => knob,
        Ok(()) => {
            log::warn!("[spring] knob position diverged ({}), resetting", knob);
            state.reset(layout.rest_length);
            layout.rest_knob()
        }
        Err(d) => {
            log::warn!("[spring] state diverged ({}), resetting", d);
            state.reset(layout.rest_length);
            layout.rest_knob()
        }
    }
}
