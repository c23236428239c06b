use super::InputWiring;
use crate::constants::{DARK_BUTTON_ID, HEATMAP_BUTTON_ID, SLOMO_BUTTON_ID};
use crate::dom;
use crate::keys::{arrow_for_key, toggle_for_key, ToggleKey};
use crate::overlay;
use boing_core::InputCommand;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Flip a display toggle and mirror it on the page.
pub fn apply_toggle(w: &InputWiring, toggle: ToggleKey) {
    let mut toy = w.toy.borrow_mut();
    match toggle {
        ToggleKey::Slomo => {
            let on = toy.toggle_slomo();
            overlay::set_pressed(&w.document, SLOMO_BUTTON_ID, on);
        }
        ToggleKey::Dark => {
            let on = toy.toggle_dark();
            overlay::set_pressed(&w.document, DARK_BUTTON_ID, on);
            overlay::set_dark_page(&w.document, on);
        }
        ToggleKey::Heatmap => {
            let on = toy.toggle_heatmap();
            overlay::set_pressed(&w.document, HEATMAP_BUTTON_ID, on);
            if on {
                let layout = toy.layout();
                w.heatmap
                    .refresh(layout.width, layout.height, layout.rest_length);
            } else {
                w.heatmap.invalidate();
            }
        }
    }
}

fn handle_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    let key = ev.key();
    if let Some(arrow) = arrow_for_key(&key) {
        ev.prevent_default();
        let changed = w.held.borrow_mut().set(arrow, true);
        if changed {
            w.unlock_audio();
            let dir = w.held.borrow().direction();
            w.toy
                .borrow_mut()
                .handle(InputCommand::SetKeyboardDirection(dir));
        }
        return;
    }
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    if let Some(toggle) = toggle_for_key(&key) {
        apply_toggle(w, toggle);
    }
}

fn handle_keyup(ev: &web::KeyboardEvent, w: &InputWiring) {
    if let Some(arrow) = arrow_for_key(&ev.key()) {
        ev.prevent_default();
        let changed = w.held.borrow_mut().set(arrow, false);
        if changed {
            let dir = w.held.borrow().direction();
            w.toy
                .borrow_mut()
                .handle(InputCommand::SetKeyboardDirection(dir));
        }
    }
}

pub fn wire_keyboard(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let w = w.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keyup(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Optional on-page buttons for the same toggles
    for (id, toggle) in [
        (SLOMO_BUTTON_ID, ToggleKey::Slomo),
        (DARK_BUTTON_ID, ToggleKey::Dark),
        (HEATMAP_BUTTON_ID, ToggleKey::Heatmap),
    ] {
        let doc = w.document.clone();
        let w = w.clone();
        dom::add_click_listener(&doc, id, move || apply_toggle(&w, toggle));
    }
}
