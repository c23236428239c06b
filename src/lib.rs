#![cfg(target_arch = "wasm32")]
use boing_core::{
    BoingAudio, BoingCounter, CounterStore, Emitter, Layout, MemoryStore, NullReporter, Reporter,
    SpringParams, SpringToy,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod keys;
mod labels;
mod net;
mod overlay;
mod render;
mod storage;

use constants::*;

/// Audio that does nothing, for browsers without a usable `AudioContext`.
struct SilentAudio;

impl BoingAudio for SilentAudio {
    fn play(&mut self, _cue: &boing_core::AudioCue) {}
    fn fade_all(&mut self, _fade_ms: f64) {}
}

struct AudioParts {
    audio_ctx: Option<web::AudioContext>,
    sink: Box<dyn BoingAudio>,
}

fn build_audio() -> AudioParts {
    let audio_ctx = match web::AudioContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::warn!("[audio] no AudioContext, running silent: {:?}", e);
            return AudioParts {
                audio_ctx: None,
                sink: Box::new(SilentAudio),
            };
        }
    };
    match audio::BoingPlayer::new(audio_ctx.clone()) {
        Ok(player) => {
            player.load_sample();
            player.unlock();
            AudioParts {
                audio_ctx: Some(audio_ctx),
                sink: Box::new(player),
            }
        }
        Err(()) => AudioParts {
            audio_ctx: None,
            sink: Box::new(SilentAudio),
        },
    }
}

fn open_counter_store() -> Box<dyn CounterStore> {
    match storage::LocalCounterStore::open(STORAGE_KEY) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("[store] {}; boing count will not persist", e);
            Box::new(MemoryStore::default())
        }
    }
}

fn build_reporter(api_base: Option<&str>) -> Box<dyn Reporter> {
    match api_base {
        Some(base) => {
            log::info!("[net] reporting boings to {}", base);
            Box::new(net::HttpReporter::new(base))
        }
        None => Box::new(NullReporter),
    }
}

fn wire_start_overlay(w: &events::InputWiring) {
    let wiring = w.clone();
    dom::add_click_listener(&w.document, START_BUTTON_ID, move || {
        wiring.unlock_audio();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("boing-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (width, height) = dom::fit_canvas(&canvas);
    let layout = Layout::from_canvas(width, height);
    let api_base = dom::api_base(&canvas, DEFAULT_API_BASE);

    let AudioParts { audio_ctx, sink } = build_audio();
    let counter = BoingCounter::load(open_counter_store());
    log::info!("[store] boinged {} times so far", counter.count());
    let emitter = Emitter::new(sink, build_reporter(api_base.as_deref()), counter);

    let toy = Rc::new(RefCell::new(SpringToy::new(
        layout,
        SpringParams::default(),
        emitter,
    )));
    let heatmap = Rc::new(net::HeatmapOverlay::new(api_base.as_deref()));

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        toy: toy.clone(),
        audio_ctx,
        heatmap: heatmap.clone(),
        held: Rc::new(RefCell::new(keys::HeldArrows::default())),
    };
    wire_start_overlay(&wiring);
    events::wire_pointer(&wiring);
    events::wire_keyboard(&wiring);
    events::wire_lifecycle(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        toy, document, ctx2d, heatmap,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
