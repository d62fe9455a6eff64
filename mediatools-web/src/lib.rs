#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod download;
pub mod fragments;
pub mod pages;
pub mod progress;
pub mod router;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Reflect the persisted theme before the first paint.
    theme::apply_theme(theme::persisted_theme());
    yew::Renderer::<app::App>::new().render();
}
