use std::rc::Rc;

use manani::{Host, Storefront, SCRIPT_LOADED_MESSAGE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod dom;
mod host;

use dom::BrowserPage;
use host::BrowserHost;

/// Logs the load banner and mounts the storefront once the page is parsed.
pub fn start() {
    let host: Rc<dyn Host> = Rc::new(BrowserHost);
    host.log(SCRIPT_LOADED_MESSAGE);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        web_sys::console::error_1(&JsValue::from_str("manani: no document"));
        return;
    };

    if document.ready_state() != "loading" {
        mount(&document, host);
        return;
    }

    let doc = document.clone();
    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
        mount(&doc, host.clone());
    }) as Box<dyn FnMut(_)>);

    match document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
    {
        Ok(()) => cb.forget(),
        Err(_) => web_sys::console::error_1(&JsValue::from_str(
            "manani: failed to listen for DOMContentLoaded",
        )),
    }
}

fn mount(document: &web_sys::Document, host: Rc<dyn Host>) {
    let page = BrowserPage::new(document.clone(), host);
    if let Err(e) = Storefront::default().mount(&page) {
        web_sys::console::error_1(&JsValue::from_str(&format!("manani: mount failed: {e}")));
    }
}
