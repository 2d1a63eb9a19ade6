//! Billetera IO - Biometric DeFi Wallet Prototype
//!
//! Leptos frontend. Everything is mock data: balances, the swap rate, and
//! both async flows, which are fixed timers standing in for real latency.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Billetera IO starting...");

    // The static loading screen is part of index.html; drop it once the
    // wasm module is in charge.
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => {
            log::warn!("no document available, skipping loading screen removal");
            return;
        }
    };

    if let Some(loading_element) = document.get_element_by_id("app-loading") {
        if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
            html_element.class_list().add_1("hidden").ok();
        }
        // Backup in case the stylesheet has not loaded yet
        loading_element
            .set_attribute("style", "display: none !important;")
            .ok();
        log::info!("loading screen hidden");
    } else {
        log::warn!("loading element 'app-loading' not found");
    }
}
