//! Page-ready wiring.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::EnhanceConfig;
use crate::highlight;
use crate::tabs::TabInitializer;

/// Runs `f` once the document structure is ready.
///
/// When the document is past the `loading` state the callback runs
/// immediately; otherwise it is deferred to `DOMContentLoaded`.
pub fn run_on_dom_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let callback = Closure::once(f);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref());
        callback.forget();
    } else {
        f();
    }
}

/// Enhances the current page: tab widget first, hover highlighting second.
/// The order is fixed; hover binding snapshots the list items as the tab
/// transformation left them.
pub fn enhance_page(config: EnhanceConfig) {
    TabInitializer::new(config.clone()).init();
    highlight::bind_hover_highlight(&config);
}
