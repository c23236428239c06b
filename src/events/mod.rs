pub mod keyboard;
pub mod lifecycle;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use lifecycle::wire_lifecycle;
pub use pointer::wire_pointer;

use crate::keys::HeldArrows;
use crate::net::HeatmapOverlay;
use boing_core::SpringToy;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every input listener needs.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub toy: Rc<RefCell<SpringToy>>,
    pub audio_ctx: Option<web::AudioContext>,
    pub heatmap: Rc<HeatmapOverlay>,
    pub held: Rc<RefCell<HeldArrows>>,
}

impl InputWiring {
    /// Resume audio on the first user gesture and drop the start overlay.
    pub fn unlock_audio(&self) {
        if let Some(ctx) = &self.audio_ctx {
            _ = ctx.resume();
        }
        if !crate::overlay::is_hidden(&self.document) {
            crate::overlay::hide(&self.document);
        }
    }
}
