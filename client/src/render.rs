//! The render function shared by the server and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `server` calls [`render_app`] after fetching the payload and embeds the
//! result in `#root`. In the browser, hydration runs the same [`App`] tree
//! over that markup with the payload decoded from the page, so both sides
//! must produce identical HTML for equal payloads.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use leptos::prelude::*;
use state_api::InitialData;

use crate::app::App;

/// Render the article list for `data` to an HTML string. Synchronous and
/// side-effect free.
pub fn render_app(data: &InitialData) -> String {
    let data = data.clone();
    view! { <App data/> }.to_html()
}
