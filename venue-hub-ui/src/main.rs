//! Venue Hub
//!
//! Campus venue-booking and facilities-management front-end built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Auth-gated routing on top of the Clerk browser SDK
//! - Role-based sidebar (admin, maintenance, general users)
//! - Bottom action bar on narrow viewports
//! - Session identity mirror for push notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Routing decisions, menu catalogs and selection come from the
//! `venue-hub` core crate; this crate renders them and talks to the browser.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod config;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    logging::init(&config::app_config().logging.level);
    tracing::info!("Venue Hub v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(|| view! { <app::App /> });
}
