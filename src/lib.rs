//! Wardrobe - Authentication Frontend
//!
//! The login/register surface of the Wardrobe application, built with Leptos
//! and WebAssembly against an external auth API.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
