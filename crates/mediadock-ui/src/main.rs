//! MediaDock UI entry point for WASM.

#![no_main]

use leptos::prelude::*;
use mediadock_ui::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Remove the loading placeholder
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(loading) = document.get_element_by_id("loading")
    {
        loading.remove();
    }

    mount_to_body(App);
}
