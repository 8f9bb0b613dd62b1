//! # folio-client
//!
//! Leptos CSR frontend for a single-page developer portfolio.
//!
//! `state` and `util` hold the view-state core: theme, navigation, project
//! modal, contact form session and the reveal orchestration engine. They are
//! plain Rust and run natively under test. `components`, `pages` and `app`
//! bind that core to the DOM; browser-only pieces are gated behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::SiteConfig::load();
    log::info!("starting with {:?} theme", config.initial_theme);
    leptos::mount::mount_to_body(move || view! { <app::App config=config/> });
}
