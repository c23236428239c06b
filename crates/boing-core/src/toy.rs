use crate::clock::substeps;
use crate::curve::spring_path;
use crate::emitter::Emitter;
use crate::interaction::{InputCommand, InteractionMapper, InteractionMode, Transition};
use crate::layout::Layout;
use crate::spring::{substep, time_scale, Drive, SpringParams, SpringState};
use glam::DVec2;

/// Everything needed to draw one frame. Built from the state at the start of
/// the frame, before physics advances.
#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub layout: Layout,
    pub knob: DVec2,
    pub drag_target: Option<DVec2>,
    pub spring_path: Vec<DVec2>,
    pub mode: InteractionMode,
    pub slomo: bool,
    pub dark: bool,
    pub heatmap: bool,
    pub local_count: u64,
    pub global_count: Option<u64>,
}

/// The toy's single owner of mutable state: spring, interaction, display
/// toggles and the boing emitter.
pub struct SpringToy {
    layout: Layout,
    params: SpringParams,
    spring: SpringState,
    knob: DVec2,
    interaction: InteractionMapper,
    emitter: Emitter,
    slomo: bool,
    dark: bool,
    heatmap: bool,
}

impl SpringToy {
    pub fn new(layout: Layout, params: SpringParams, emitter: Emitter) -> Self {
        Self {
            layout,
            params,
            spring: SpringState::at_rest(layout.rest_length),
            knob: layout.rest_knob(),
            interaction: InteractionMapper::new(),
            emitter,
            slomo: false,
            dark: false,
            heatmap: false,
        }
    }

    pub fn handle(&mut self, command: InputCommand) -> Transition {
        let transition = self
            .interaction
            .apply(command, &self.spring, self.knob, &self.layout);
        match transition {
            Transition::Grabbed { source, caught } => {
                log::debug!("[input] grabbed via {:?}", source);
                if caught {
                    self.emitter.hush();
                }
            }
            Transition::Released(Some(event)) => {
                self.emitter.boing(&event, self.slomo);
            }
            Transition::Cancelled => self.reset(),
            Transition::Released(None) | Transition::None => {}
        }
        transition
    }

    /// Snapshot for drawing, then advance physics by `delta_ms`.
    pub fn tick(&mut self, delta_ms: f64) -> RenderFrame {
        let frame = self.render_frame();
        self.advance(delta_ms);
        frame
    }

    /// Advance physics by `delta_ms`, subdivided into stable sub-steps.
    pub fn advance(&mut self, delta_ms: f64) {
        let (count, size_ms) = substeps(delta_ms);
        let scale = time_scale(size_ms, self.slomo);
        for _ in 0..count {
            let drive = match self.interaction.drag_target(&self.layout, scale) {
                Some(target) => Drive::Drag(target),
                None => Drive::Free,
            };
            self.knob = substep(&mut self.spring, &self.layout, &self.params, drive, scale);
        }
    }

    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            layout: self.layout,
            knob: self.knob,
            drag_target: self.interaction.target_point(),
            spring_path: spring_path(self.layout.anchor, self.knob, self.layout.rest_length),
            mode: self.interaction.mode(),
            slomo: self.slomo,
            dark: self.dark,
            heatmap: self.heatmap,
            local_count: self.emitter.local_count(),
            global_count: self.emitter.global_count(),
        }
    }

    /// New canvas geometry: drop any grab and start again from rest.
    pub fn resize(&mut self, layout: Layout) {
        self.layout = layout;
        self.reset();
    }

    /// Focus or visibility lost: drop any grab and start again from rest.
    pub fn suspend(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.interaction.force_release();
        self.spring.reset(self.layout.rest_length);
        self.knob = self.layout.rest_knob();
        self.emitter.hush();
    }

    pub fn toggle_slomo(&mut self) -> bool {
        self.slomo = !self.slomo;
        log::info!("[toy] slow motion {}", if self.slomo { "on" } else { "off" });
        self.slomo
    }

    pub fn toggle_dark(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    pub fn toggle_heatmap(&mut self) -> bool {
        self.heatmap = !self.heatmap;
        self.heatmap
    }

    pub fn refresh_global_count(&self) {
        self.emitter.refresh_global_count();
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn spring(&self) -> &SpringState {
        &self.spring
    }

    #[inline]
    pub fn knob(&self) -> DVec2 {
        self.knob
    }

    #[inline]
    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[inline]
    pub fn slomo(&self) -> bool {
        self.slomo
    }
}
