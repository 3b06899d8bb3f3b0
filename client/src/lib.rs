//! # client
//!
//! Leptos components for the article list, plus the two pieces both hosts
//! share: [`render::render_app`] and the page payload codec in [`payload`].
//!
//! The server depends on this crate with the `ssr` feature and renders
//! [`app::App`] to a string. The browser build enables `hydrate` and mounts
//! the same component over that markup from the embedded payload.

pub mod app;
pub mod components;
#[cfg(feature = "hydrate")]
pub mod hydrate;
pub mod payload;
pub mod render;
pub mod util;

/// Id of the element the article list is rendered into and hydrated from.
pub const ROOT_ELEMENT_ID: &str = "root";
