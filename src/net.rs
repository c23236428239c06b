use boing_core::{
    count_url, encode_report, heatmap_url, parse_count, report_url, BoingEvent, GlobalCount,
    ReportError, Reporter,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn transport(e: JsValue) -> ReportError {
    ReportError::Transport(format!("{:?}", e))
}

async fn fetch_text(request: &web::Request) -> Result<String, ReportError> {
    let window = web::window().ok_or_else(|| ReportError::Transport("no window".into()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    if !resp.ok() {
        return Err(ReportError::Status(resp.status()));
    }
    JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| ReportError::Decode("body is not text".into()))
}

async fn post_boing(base: &str, event: &BoingEvent) -> Result<u64, ReportError> {
    let body = encode_report(event)?;
    let headers = web::Headers::new().map_err(transport)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(transport)?;
    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    let request =
        web::Request::new_with_str_and_init(&report_url(base), &init).map_err(transport)?;
    parse_count(&fetch_text(&request).await?)
}

async fn get_count(base: &str) -> Result<u64, ReportError> {
    let request = web::Request::new_with_str(&count_url(base)).map_err(transport)?;
    parse_count(&fetch_text(&request).await?)
}

/// Reports boings to the counting service and keeps the global count.
/// Every request runs detached; failures are logged and dropped.
pub struct HttpReporter {
    base: Rc<str>,
    count: GlobalCount,
}

impl HttpReporter {
    pub fn new(base: &str) -> Self {
        Self {
            base: Rc::from(base),
            count: GlobalCount::default(),
        }
    }
}

impl Reporter for HttpReporter {
    fn report(&self, event: &BoingEvent) {
        let base = self.base.clone();
        let count = self.count.clone();
        let event = *event;
        spawn_local(async move {
            match post_boing(&base, &event).await {
                Ok(c) => count.set(c),
                Err(e) => log::debug!("[net] boing report dropped: {}", e),
            }
        });
    }

    fn refresh_count(&self) {
        let base = self.base.clone();
        let count = self.count.clone();
        spawn_local(async move {
            match get_count(&base).await {
                Ok(c) => count.set(c),
                Err(e) => log::debug!("[net] count refresh failed: {}", e),
            }
        });
    }

    fn latest_count(&self) -> Option<u64> {
        self.count.get()
    }
}

/// Server-rendered heatmap drawn under the wall.
///
/// A refresh loads into a fresh image and only swaps it in once loaded, so a
/// failed load keeps the previous picture. Loads started before the overlay
/// was switched off are discarded by generation.
pub struct HeatmapOverlay {
    base: Option<Rc<str>>,
    image: Rc<RefCell<Option<web::HtmlImageElement>>>,
    generation: Rc<Cell<u32>>,
}

impl HeatmapOverlay {
    pub fn new(base: Option<&str>) -> Self {
        Self {
            base: base.map(Rc::from),
            image: Rc::new(RefCell::new(None)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn image(&self) -> Option<web::HtmlImageElement> {
        self.image.borrow().clone()
    }

    /// Drop in-flight loads, e.g. when the overlay is switched off.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    pub fn refresh(&self, width: f64, height: f64, rest_length: f64) {
        let Some(base) = &self.base else {
            return;
        };
        let Ok(img) = web::HtmlImageElement::new() else {
            return;
        };
        let stamp = js_sys::Date::now() as u64;
        let url = heatmap_url(base, width, height, rest_length, stamp);

        let generation = self.generation.get();
        let current = self.generation.clone();
        let slot = self.image.clone();
        let loaded = img.clone();
        let on_load = Closure::once_into_js(move || {
            if current.get() == generation {
                *slot.borrow_mut() = Some(loaded);
            }
        });
        let on_error = Closure::once_into_js(move || {
            log::debug!("[net] heatmap load failed, keeping previous image");
        });
        _ = img.add_event_listener_with_callback("load", on_load.unchecked_ref());
        _ = img.add_event_listener_with_callback("error", on_error.unchecked_ref());
        img.set_src(&url);
    }
}
