//! Interaction mapping: turns normalized input commands into grab/release
//! transitions and a per-sub-step drag target for the integrator.

use crate::constants::{
    BOING_THRESHOLD, CAPTURE_RADIUS, CATCH_SPEED, KEYBOARD_LERP, KEYBOARD_REACH_X,
    KEYBOARD_REACH_Y,
};
use crate::layout::Layout;
use crate::spring::SpringState;
use glam::DVec2;

/// Input from any source, already mapped into canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputCommand {
    GrabAt(DVec2),
    Move(DVec2),
    Release,
    /// Held arrow keys as a vector with components in {-1, 0, 1}.
    SetKeyboardDirection(DVec2),
    /// Forced release (focus or visibility loss, resize). Never boings.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Keyboard,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    AtRest,
    Dragging(DragSource),
}

/// A release far enough from rest to be heard and counted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoingEvent {
    pub force_magnitude: f64,
    pub angle: f64,
    pub distance_ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    None,
    /// `caught` is set when the knob was grabbed while still moving.
    Grabbed { source: DragSource, caught: bool },
    Released(Option<BoingEvent>),
    Cancelled,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionMapper {
    mode: InteractionMode,
    pointer: DVec2,
    keyboard_dir: DVec2,
    keyboard_target: DVec2,
}

impl InteractionMapper {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn apply(
        &mut self,
        command: InputCommand,
        spring: &SpringState,
        knob: DVec2,
        layout: &Layout,
    ) -> Transition {
        match (command, self.mode) {
            (InputCommand::GrabAt(pos), InteractionMode::AtRest) => {
                if pos.distance(knob) >= CAPTURE_RADIUS {
                    return Transition::None;
                }
                self.pointer = pos;
                self.grab(DragSource::Pointer, spring)
            }
            (InputCommand::Move(pos), InteractionMode::Dragging(DragSource::Pointer)) => {
                self.pointer = pos;
                Transition::None
            }
            (InputCommand::Release, InteractionMode::Dragging(DragSource::Pointer)) => {
                self.mode = InteractionMode::AtRest;
                Transition::Released(release_event(knob, spring, layout))
            }
            (InputCommand::SetKeyboardDirection(dir), mode) => {
                self.keyboard_dir = DVec2::new(unit_sign(dir.x), unit_sign(dir.y));
                let held = self.keyboard_dir != DVec2::ZERO;
                match mode {
                    InteractionMode::AtRest if held => {
                        self.keyboard_target = knob;
                        self.grab(DragSource::Keyboard, spring)
                    }
                    InteractionMode::Dragging(DragSource::Keyboard) if !held => {
                        self.mode = InteractionMode::AtRest;
                        Transition::Released(release_event(knob, spring, layout))
                    }
                    _ => Transition::None,
                }
            }
            (InputCommand::Cancel, InteractionMode::Dragging(_)) => {
                self.force_release();
                Transition::Cancelled
            }
            _ => Transition::None,
        }
    }

    fn grab(&mut self, source: DragSource, spring: &SpringState) -> Transition {
        self.mode = InteractionMode::Dragging(source);
        Transition::Grabbed {
            source,
            caught: spring.speed() > CATCH_SPEED,
        }
    }

    /// Drop any grab without producing a release event.
    pub fn force_release(&mut self) {
        self.mode = InteractionMode::AtRest;
        self.keyboard_dir = DVec2::ZERO;
    }

    /// Drag target for one sub-step, measured from the anchor.
    ///
    /// Pointer drags follow the pointer exactly. Keyboard drags ease toward a
    /// far virtual goal so a held key keeps stretching the spring.
    pub fn drag_target(&mut self, layout: &Layout, time_scale: f64) -> Option<DVec2> {
        match self.mode {
            InteractionMode::AtRest => None,
            InteractionMode::Dragging(DragSource::Pointer) => Some(self.pointer - layout.anchor),
            InteractionMode::Dragging(DragSource::Keyboard) => {
                let goal = layout.anchor
                    + DVec2::new(
                        self.keyboard_dir.x * KEYBOARD_REACH_X,
                        self.keyboard_dir.y * KEYBOARD_REACH_Y,
                    );
                let alpha = (KEYBOARD_LERP * time_scale).clamp(0.0, 1.0);
                self.keyboard_target = self.keyboard_target.lerp(goal, alpha);
                Some(self.keyboard_target - layout.anchor)
            }
        }
    }

    /// Absolute point the knob is being pulled toward, for the tension line.
    pub fn target_point(&self) -> Option<DVec2> {
        match self.mode {
            InteractionMode::AtRest => None,
            InteractionMode::Dragging(DragSource::Pointer) => Some(self.pointer),
            InteractionMode::Dragging(DragSource::Keyboard) => Some(self.keyboard_target),
        }
    }
}

/// Boing produced by releasing the knob at `knob`, if it was displaced past
/// the threshold from its rest position.
pub fn release_event(knob: DVec2, spring: &SpringState, layout: &Layout) -> Option<BoingEvent> {
    let displacement = knob.distance(layout.rest_knob());
    (displacement > BOING_THRESHOLD).then(|| BoingEvent {
        force_magnitude: displacement,
        angle: spring.angle,
        distance_ratio: spring.length / layout.rest_length,
    })
}

#[inline]
fn unit_sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
