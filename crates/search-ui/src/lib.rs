pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod highlight;
pub mod popup;
pub mod tabs;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn enhance() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    enhance();
}
