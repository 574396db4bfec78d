use manani::{Cancelable, Host};
use wasm_bindgen::JsValue;

/// Console and `window.alert`.
pub(super) struct BrowserHost;

impl Host for BrowserHost {
    fn log(&self, message: &str) {
        web_sys::console::log_1(&JsValue::from_str(message));
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}

pub(super) struct DomEvent<'a>(pub(super) &'a web_sys::Event);

impl Cancelable for DomEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
