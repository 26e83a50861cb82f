//! Configuration for the search results page enhancement.
//!
//! Every id, class, and tag name the enhancement touches lives here, on an
//! explicitly constructed struct that callers pass down. There is no ambient
//! global configuration.

/// Ids, classes, and tag names of the markup the enhancement operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceConfig {
    /// Id of the element hosting the tabbed results UI.
    pub container_id: String,
    /// Class marking an element as removed from visible layout.
    pub hidden_class: String,
    /// Class of a module section that becomes one tab.
    pub tab_class: String,
    /// Tag of a module section.
    pub tab_element: String,
    /// Tag of the header inside a module supplying the tab label.
    pub tab_header_element: String,
    /// Class of the content sub-element supplying the tab body.
    pub tab_content_class: String,
    /// Tag of the content sub-element.
    pub tab_content_element: String,
    /// Id of the element whose list items get hover highlighting.
    pub results_container_id: String,
    /// Class set on a list item while the pointer is over it.
    pub selected_item_class: String,
    /// Class a list item is reset to when the pointer leaves.
    pub normal_item_class: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            container_id: "kiv-results".to_string(),
            hidden_class: "hidden".to_string(),
            tab_class: "tab".to_string(),
            tab_element: "div".to_string(),
            tab_header_element: "h3".to_string(),
            tab_content_class: "tab-bd".to_string(),
            tab_content_element: "div".to_string(),
            results_container_id: "search-result-container".to_string(),
            selected_item_class: "selected-item".to_string(),
            normal_item_class: "normal".to_string(),
        }
    }
}
