pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod routes;
pub mod style;
pub mod theme;

pub use crate::app::App;

/// Hydration entry point for the wasm client.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
