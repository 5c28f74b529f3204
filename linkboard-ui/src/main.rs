//! Linkboard Web Client
//!
//! Browser front end for Linkboard, a client-side rendered Leptos app built
//! to WebAssembly. Pages:
//!
//! - `/login`, `/register`: email/password authentication
//! - `/`: greeting, post composer and the feed
//! - `/profile/:user_id`: profile header, posts and the edit dialog
//!
//! Requests go out through gloo-net. Session handling, validation, routing
//! rules and view state all come from the shared `linkboard` crate, so the
//! browser and the terminal client behave the same.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(app::App);
}
