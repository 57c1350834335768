//! TrustPlane - marketing site for the enterprise AI control plane
//!
//! Server-rendered Leptos pages with an interactive demo panel, a contact
//! form with bot screening and webhook delivery, and Stripe-backed pricing.

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
