//! Smart ЖКХ Dashboard
//!
//! Utility billing dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! The bills page requests one bill per visit from the billing service over
//! HTTP. Request settings live in local storage and are edited on the
//! settings page.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
