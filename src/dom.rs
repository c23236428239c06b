use crate::constants::{CANVAS_CHROME, CANVAS_HEIGHT, CANVAS_WIDTH_FRACTION, MAX_CANVAS_WIDTH};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Size the canvas to the window and return its logical (CSS pixel) size.
///
/// The backing store is scaled by `devicePixelRatio`; drawing code applies
/// the same factor as a transform so everything else works in CSS pixels.
pub fn fit_canvas(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let Some(window) = web::window() else {
        return (MAX_CANVAS_WIDTH, CANVAS_HEIGHT);
    };
    let inner_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(MAX_CANVAS_WIDTH);
    let width = (inner_width * CANVAS_WIDTH_FRACTION - CANVAS_CHROME)
        .min(MAX_CANVAS_WIDTH)
        .max(1.0)
        .floor();
    let height = CANVAS_HEIGHT;
    let dpr = device_pixel_ratio();
    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);
    _ = canvas.set_attribute("style", &format!("width:{}px;height:{}px", width, height));
    (width, height)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(1.0)
}

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn pointer_canvas_pos(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

/// API base URL from the canvas's `data-api-base` attribute, if any.
pub fn api_base(canvas: &web::HtmlCanvasElement, fallback: &str) -> Option<String> {
    let base = canvas
        .get_attribute(crate::constants::API_BASE_ATTR)
        .unwrap_or_else(|| fallback.to_string());
    let base = base.trim().trim_end_matches('/').to_string();
    (!base.is_empty()).then_some(base)
}
