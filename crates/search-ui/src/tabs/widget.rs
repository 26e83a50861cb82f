//! Tab widget rendered with plain DOM nodes.
//!
//! The widget sits behind the narrow [`TabWidget`] seam so the tab
//! initializer does not care what renders the strip; [`DomTabView`] is the
//! shipped implementation.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

pub const ROOT_CLASS: &str = "tabview";
pub const NAV_CLASS: &str = "tabview__nav";
pub const CONTENT_CLASS: &str = "tabview__content";
pub const TAB_CLASS: &str = "tabview__tab";
pub const TAB_ACTIVE_CLASS: &str = "tabview__tab--active";
pub const PANEL_CLASS: &str = "tabview__panel";

/// The rendering collaborator the tab initializer talks to.
pub trait TabWidget {
    /// Appends one tab. `content` is re-parented into the widget's panel,
    /// not copied; `None` yields an empty panel.
    fn add_tab(&mut self, label: &str, content: Option<Element>);
    /// Activates the tab at `index`. Out of range is a no-op.
    fn set_active_index(&mut self, index: usize);
    /// Attaches the rendered widget to `container`.
    fn append_to(&self, container: &Element) -> Result<(), String>;
}

/// Tab strip plus panel stack built from plain elements.
///
/// Activation toggles [`TAB_ACTIVE_CLASS`] on the nav items and the
/// configured hidden class on the panels. One delegated click listener on
/// the nav handles tab switching for every current and future tab.
pub struct DomTabView {
    root: Element,
    nav: Element,
    panels: Element,
    hidden_class: String,
    tab_count: usize,
}

impl DomTabView {
    pub fn new(hidden_class: &str) -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("No document object")?;

        let root = document
            .create_element("div")
            .map_err(|e| format!("Failed to create tabview root: {:?}", e))?;
        root.set_class_name(ROOT_CLASS);

        let nav = document
            .create_element("ul")
            .map_err(|e| format!("Failed to create tab nav: {:?}", e))?;
        nav.set_class_name(NAV_CLASS);

        let panels = document
            .create_element("div")
            .map_err(|e| format!("Failed to create panel container: {:?}", e))?;
        panels.set_class_name(CONTENT_CLASS);

        root.append_child(&nav)
            .map_err(|e| format!("Failed to attach tab nav: {:?}", e))?;
        root.append_child(&panels)
            .map_err(|e| format!("Failed to attach panel container: {:?}", e))?;

        attach_click_delegation(&nav, &panels, hidden_class);

        Ok(Self {
            root,
            nav,
            panels,
            hidden_class: hidden_class.to_string(),
            tab_count: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.tab_count
    }

    pub fn is_empty(&self) -> bool {
        self.tab_count == 0
    }
}

impl TabWidget for DomTabView {
    fn add_tab(&mut self, label: &str, content: Option<Element>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let Ok(item) = document.create_element("li") else {
            return;
        };
        item.set_class_name(TAB_CLASS);
        let _ = item.set_attribute("data-tab-index", &self.tab_count.to_string());
        item.set_text_content(Some(label));

        let Ok(panel) = document.create_element("div") else {
            return;
        };
        panel.set_class_name(PANEL_CLASS);
        // New panels start hidden; activation reveals exactly one.
        let _ = panel.class_list().add_1(&self.hidden_class);
        if let Some(content) = content {
            let _ = panel.append_child(&content);
        }

        let _ = self.nav.append_child(&item);
        let _ = self.panels.append_child(&panel);
        self.tab_count += 1;
    }

    fn set_active_index(&mut self, index: usize) {
        if index >= self.tab_count {
            log::debug!(
                "ignoring activation of tab {} (widget has {})",
                index,
                self.tab_count
            );
            return;
        }
        activate(&self.nav, &self.panels, &self.hidden_class, index);
    }

    fn append_to(&self, container: &Element) -> Result<(), String> {
        container
            .append_child(&self.root)
            .map(|_| ())
            .map_err(|e| format!("Failed to attach tab widget: {:?}", e))
    }
}

/// Marks the nav item at `index` active and reveals only its panel.
fn activate(nav: &Element, panels: &Element, hidden_class: &str, index: usize) {
    let items = nav.children();
    for i in 0..items.length() {
        if let Some(item) = items.item(i) {
            if i as usize == index {
                let _ = item.class_list().add_1(TAB_ACTIVE_CLASS);
            } else {
                let _ = item.class_list().remove_1(TAB_ACTIVE_CLASS);
            }
        }
    }

    let stack = panels.children();
    for i in 0..stack.length() {
        if let Some(panel) = stack.item(i) {
            if i as usize == index {
                let _ = panel.class_list().remove_1(hidden_class);
            } else {
                let _ = panel.class_list().add_1(hidden_class);
            }
        }
    }
}

/// One click listener on the nav switches tabs for every nav item, current
/// and future, instead of one listener per item.
fn attach_click_delegation(nav: &Element, panels: &Element, hidden_class: &str) {
    let nav_for_closure = nav.clone();
    let panels_for_closure = panels.clone();
    let hidden = hidden_class.to_string();

    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(target) = e.target() else { return };
        let Ok(element) = target.dyn_into::<Element>() else {
            return;
        };

        // The click may land on markup nested inside the nav item.
        let item = match element.closest("li") {
            Ok(Some(item)) => item,
            _ => return,
        };

        let Some(index) = item
            .get_attribute("data-tab-index")
            .and_then(|v| v.parse::<usize>().ok())
        else {
            return;
        };

        activate(&nav_for_closure, &panels_for_closure, &hidden, index);
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = nav.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());

    // The widget lives until navigation; so does its listener.
    on_click.forget();
}
