//! Kiroku
//!
//! A minimal record-keeping form over a hosted data store, built with
//! Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Entries live in a remote table API; the client loads them once on mount,
//! inserts on submit, and keeps a newest-first snapshot in memory.

use leptos::*;

mod actions;
mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
