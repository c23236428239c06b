use crate::constants::START_OVERLAY_ID;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

/// Reflect a toggle's state on its button, if the page has one.
pub fn set_pressed(document: &web::Document, element_id: &str, pressed: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
    }
}

pub fn set_dark_page(document: &web::Document, dark: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = if dark { cl.add_1("dark") } else { cl.remove_1("dark") };
    }
}
