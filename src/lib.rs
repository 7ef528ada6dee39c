//! Early Access - landing page that collects early access signups
//!
//! A Leptos application rendered on the server and hydrated in the browser.
//! Signups are validated client-side and forwarded to EmailJS.

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
