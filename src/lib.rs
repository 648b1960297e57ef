//! # offerdeck
//!
//! Leptos + WASM front-end for the OfferDeck marketplace: a grid of
//! purchasable membership/benefit listings with buy and negotiate flows,
//! backed by an external managed identity + data service.
//!
//! This crate contains pages, components, application state, and the
//! network layer that talks to the managed backend's REST surface. There
//! is no custom server here; authentication, persistence, and payment
//! hand-off are all delegated to external collaborators.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
