use super::InputWiring;
use crate::dom;
use boing_core::Layout;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize, focus loss and tab hiding all drop the grab and reset the spring
/// without a boing.
pub fn wire_lifecycle(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let (width, height) = dom::fit_canvas(&w.canvas);
            w.held.borrow_mut().clear();
            w.toy
                .borrow_mut()
                .resize(Layout::from_canvas(width, height));
            log::info!("[frame] resized to {}x{}", width, height);
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            w.held.borrow_mut().clear();
            w.toy.borrow_mut().suspend();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let w = w.clone();
        let doc = w.document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if w.document.hidden() {
                w.held.borrow_mut().clear();
                w.toy.borrow_mut().suspend();
            }
        }) as Box<dyn FnMut()>);
        _ = doc.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
