use crate::constants::{COUNT_POLL_MS, GLOBAL_COUNT_ID, HEATMAP_REFRESH_MS, LOCAL_COUNT_ID};
use crate::dom;
use crate::labels;
use crate::net::HeatmapOverlay;
use crate::render;
use boing_core::{FrameClock, Interval, RenderFrame, SpringToy};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub toy: Rc<RefCell<SpringToy>>,
    pub document: web::Document,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub heatmap: Rc<HeatmapOverlay>,

    pub started: Instant,
    pub clock: FrameClock,
    pub count_poll: Interval,
    pub heatmap_refresh: Interval,

    pub shown_local: Option<u64>,
    pub shown_global: Option<Option<u64>>,
}

impl FrameContext {
    pub fn new(
        toy: Rc<RefCell<SpringToy>>,
        document: web::Document,
        ctx2d: web::CanvasRenderingContext2d,
        heatmap: Rc<HeatmapOverlay>,
    ) -> Self {
        Self {
            toy,
            document,
            ctx2d,
            heatmap,
            started: Instant::now(),
            clock: FrameClock::new(),
            count_poll: Interval::due_now(COUNT_POLL_MS),
            heatmap_refresh: Interval::new(HEATMAP_REFRESH_MS),
            shown_local: None,
            shown_global: None,
        }
    }

    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let delta_ms = self.clock.advance(now_ms);

        // Snapshot is taken before physics advances: draw lags update by one frame
        let frame = self.toy.borrow_mut().tick(delta_ms);

        let img = self.heatmap.image();
        if let Err(e) = render::draw(&self.ctx2d, &frame, img.as_ref(), dom::device_pixel_ratio()) {
            log::error!("[frame] draw error: {:?}", e);
        }
        self.update_counters(&frame);
        self.poll_collaborators(&frame, delta_ms);
    }

    fn update_counters(&mut self, frame: &RenderFrame) {
        if self.shown_local != Some(frame.local_count) {
            dom::set_text(
                &self.document,
                LOCAL_COUNT_ID,
                &labels::local_count_text(frame.local_count),
            );
            self.shown_local = Some(frame.local_count);
        }
        if self.shown_global != Some(frame.global_count) {
            dom::set_text(
                &self.document,
                GLOBAL_COUNT_ID,
                &labels::global_count_text(frame.global_count),
            );
            self.shown_global = Some(frame.global_count);
        }
    }

    fn poll_collaborators(&mut self, frame: &RenderFrame, delta_ms: f64) {
        if self.count_poll.tick(delta_ms) {
            self.toy.borrow().refresh_global_count();
        }
        if frame.heatmap {
            if self.heatmap_refresh.tick(delta_ms) {
                let l = &frame.layout;
                self.heatmap.refresh(l.width, l.height, l.rest_length);
            }
        } else {
            self.heatmap_refresh.reset();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
