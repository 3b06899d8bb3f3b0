//! HTML document wrapping the server render.
//!
//! The article markup goes into `#root` untouched, followed by the payload
//! script and the module loader that starts hydration.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use client::ROOT_ELEMENT_ID;
use client::payload::{PayloadError, initial_data_script};
use leptos::prelude::*;

use crate::config::AssetConfig;
use crate::render::RenderedPage;

/// Render the full index document for `page`.
///
/// # Errors
///
/// Returns [`PayloadError::Encode`] if the payload cannot be serialized.
pub fn index_document(page: &RenderedPage, assets: &AssetConfig) -> Result<String, PayloadError> {
    let payload_script = initial_data_script(&page.initial_data)?;
    let loader = loader_script(&assets.output_name);
    let markup = page.initial_markup.clone();
    let title = assets.site_title.clone();

    let document = view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href="/styles.css"/>
            </head>
            <body>
                <div id=ROOT_ELEMENT_ID inner_html=markup></div>
                <script inner_html=payload_script></script>
                <script type="module" inner_html=loader></script>
            </body>
        </html>
    };
    Ok(document.to_html())
}

/// Module script that initializes the wasm bundle and calls its `hydrate` export.
fn loader_script(output_name: &str) -> String {
    format!("import init, {{ hydrate }} from '/pkg/{output_name}.js';\ninit().then(() => hydrate());")
}
