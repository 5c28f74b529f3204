//! API Access
//!
//! gloo-net calls against the Linkboard REST API.

mod client;

pub use client::*;
