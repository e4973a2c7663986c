#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Apply the saved locale to <html lang, dir> before the first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    log::info!("starting buzzer client (router base: {:?})", paths::router_base());
    yew::Renderer::<app::App>::new().render();
}
