use super::InputWiring;
use crate::dom;
use boing_core::{InputCommand, Transition};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer(w: &InputWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.unlock_audio();
        let pos = dom::pointer_canvas_pos(&ev, &w.canvas);
        let transition = w.toy.borrow_mut().handle(InputCommand::GrabAt(pos));
        if let Transition::Grabbed { caught, .. } = transition {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            if caught {
                log::debug!("[input] caught mid-air at ({:.0},{:.0})", pos.x, pos.y);
            }
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = dom::pointer_canvas_pos(&ev, &w.canvas);
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return;
        }
        let mut toy = w.toy.borrow_mut();
        if toy.mode() != boing_core::InteractionMode::AtRest {
            toy.handle(InputCommand::Move(pos));
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if let Transition::Released(Some(event)) = w.toy.borrow_mut().handle(InputCommand::Release)
        {
            log::info!(
                "[input] boing force={:.1} ratio={:.2}",
                event.force_magnitude,
                event.distance_ratio
            );
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
