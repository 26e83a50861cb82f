use leptos::prelude::*;

use crate::popup;

/// Anchor that opens its target in the fixed-size help popup instead of
/// navigating. The href stays on the element so middle-click and copy-link
/// still work.
#[component]
pub fn HelpLink(
    /// Popup target URL
    #[prop(into)]
    href: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Link content
    children: Children,
) -> impl IntoView {
    let href_for_click = href.clone();

    view! {
        <a
            href=href
            class=move || format!("help-link {}", class.get().unwrap_or_default())
            on:click=move |ev| {
                // The helper always signals suppression of default navigation.
                if !popup::open_help_popup(&href_for_click) {
                    ev.prevent_default();
                }
            }
        >
            {children()}
        </a>
    }
}
