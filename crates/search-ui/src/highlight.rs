//! Hover highlighting of result list items.
//!
//! Listeners are bound once, to the list items present under the results
//! container at bind time. Items added later are not covered; there is no
//! dynamic re-binding.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::config::EnhanceConfig;

/// Attaches mouseover/mouseout listeners to every `li` under the results
/// container, flipping the item's class between the selected and normal
/// markers.
///
/// Missing container: silent no-op. Each item gets its own listener pair,
/// acting only on that item, so separate items' handlers are independent.
pub fn bind_hover_highlight(config: &EnhanceConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(container) = document.get_element_by_id(&config.results_container_id) else {
        log::debug!(
            "hover highlight skipped: no #{} on this page",
            config.results_container_id
        );
        return;
    };

    // Snapshot the live collection before attaching anything.
    let items = container.get_elements_by_tag_name("li");
    let mut snapshot: Vec<Element> = Vec::with_capacity(items.length() as usize);
    for i in 0..items.length() {
        if let Some(item) = items.item(i) {
            snapshot.push(item);
        }
    }

    let count = snapshot.len();
    for item in snapshot {
        attach_item_listeners(
            &item,
            &config.selected_item_class,
            &config.normal_item_class,
        );
    }
    log::debug!("hover highlight bound to {} result item(s)", count);
}

fn attach_item_listeners(item: &Element, selected_class: &str, normal_class: &str) {
    let over_target = item.clone();
    let over_class = selected_class.to_string();
    let mouseover = Closure::wrap(Box::new(move |_: MouseEvent| {
        over_target.set_class_name(&over_class);
    }) as Box<dyn FnMut(MouseEvent)>);

    let out_target = item.clone();
    let out_class = normal_class.to_string();
    let mouseout = Closure::wrap(Box::new(move |_: MouseEvent| {
        out_target.set_class_name(&out_class);
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = item.add_event_listener_with_callback("mouseover", mouseover.as_ref().unchecked_ref());
    let _ = item.add_event_listener_with_callback("mouseout", mouseout.as_ref().unchecked_ref());

    // The listeners live for the page lifetime.
    mouseover.forget();
    mouseout.forget();
}
