//! One-shot conversion of the results container into a tab widget.

use std::cell::RefCell;
use std::collections::HashSet;

use web_sys::Element;

use crate::config::EnhanceConfig;
use crate::tabs::widget::{DomTabView, TabWidget};

// Registry of containers that already got a tab widget. Running the
// initializer twice would otherwise append a second tab strip.
thread_local! {
    static INITIALIZED_CONTAINERS: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Builds a tab widget from the module sections of the results container.
///
/// Each module contributes one tab: its first header's text becomes the
/// label, its content sub-element is re-parented into the tab's panel, and
/// the module itself is hidden. Modules stay in the DOM.
pub struct TabInitializer {
    config: EnhanceConfig,
}

impl TabInitializer {
    pub fn new(config: EnhanceConfig) -> Self {
        Self { config }
    }

    /// Runs the transformation. Safe to call on any page: a missing document
    /// or container skips everything with no side effects, and a repeated
    /// call on the same container is a no-op.
    pub fn init(&self) {
        let config = &self.config;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(container) = document.get_element_by_id(&config.container_id) else {
            log::debug!("tab init skipped: no #{} on this page", config.container_id);
            return;
        };

        let already_initialized = INITIALIZED_CONTAINERS
            .with(|containers| containers.borrow().contains(&config.container_id));
        if already_initialized {
            log::debug!("tab init skipped: #{} already has a widget", config.container_id);
            return;
        }

        let mut tab_view = match DomTabView::new(&config.hidden_class) {
            Ok(tab_view) => tab_view,
            Err(err) => {
                log::warn!("tab init aborted: {}", err);
                return;
            }
        };

        let modules = matching_descendants(&container, &config.tab_element, &config.tab_class);
        for module in &modules {
            let label = normalize_label(
                first_descendant_by_tag(module, &config.tab_header_element)
                    .and_then(|header| header.text_content()),
            );
            let content = first_matching_descendant(
                module,
                &config.tab_content_element,
                &config.tab_content_class,
            );
            // A module missing its header or content degrades to an empty
            // label or panel; the remaining modules still get their tabs.
            tab_view.add_tab(&label, content);
            let _ = module.class_list().add_1(&config.hidden_class);
        }

        tab_view.set_active_index(0);
        if let Err(err) = tab_view.append_to(&container) {
            log::warn!("tab init: {}", err);
            return;
        }

        INITIALIZED_CONTAINERS.with(|containers| {
            containers.borrow_mut().insert(config.container_id.clone());
        });
        log::debug!(
            "tab init: built {} tab(s) in #{}",
            tab_view.len(),
            config.container_id
        );
    }
}

/// Snapshot of the descendants of `root` matching `tag` and `class`, in
/// document order. The live collection is copied out before any mutation.
fn matching_descendants(root: &Element, tag: &str, class: &str) -> Vec<Element> {
    let collection = root.get_elements_by_tag_name(tag);
    let mut matched = Vec::new();
    for i in 0..collection.length() {
        if let Some(element) = collection.item(i) {
            if element.class_list().contains(class) {
                matched.push(element);
            }
        }
    }
    matched
}

fn first_matching_descendant(root: &Element, tag: &str, class: &str) -> Option<Element> {
    matching_descendants(root, tag, class).into_iter().next()
}

fn first_descendant_by_tag(root: &Element, tag: &str) -> Option<Element> {
    root.get_elements_by_tag_name(tag).item(0)
}

/// Trims a header's text into a tab label; a missing header yields an empty
/// label rather than failing the module.
fn normalize_label(raw: Option<String>) -> String {
    raw.map(|text| text.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_trimmed_header_text() {
        assert_eq!(normalize_label(Some("  Persons \n".to_string())), "Persons");
    }

    #[test]
    fn missing_header_yields_empty_label() {
        assert_eq!(normalize_label(None), "");
        assert_eq!(normalize_label(Some(String::new())), "");
    }
}
