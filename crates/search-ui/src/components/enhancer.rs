//! Headless component that enhances the server-rendered results markup.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bootstrap;
use crate::config::EnhanceConfig;

/// Runs the page enhancement once after mount.
///
/// Renders nothing itself; the tab widget and hover listeners attach to the
/// markup already on the page.
#[component]
pub fn SearchEnhancer(
    /// Selector configuration (default: the standard results page markup)
    #[prop(optional)]
    config: Option<EnhanceConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();

    // Run once per mount, not on every effect re-run
    let is_initialized = StoredValue::new(false);

    Effect::new(move |_| {
        if !is_initialized.get_value() {
            is_initialized.set_value(true);

            let config = config.clone();
            spawn_local(async move {
                // Yield once so the surrounding markup has settled.
                gloo_timers::future::TimeoutFuture::new(0).await;
                bootstrap::run_on_dom_ready(move || bootstrap::enhance_page(config));
            });
        }
    });

    view! {
        <div class="search-enhancer" style="display: none;"></div>
    }
}
