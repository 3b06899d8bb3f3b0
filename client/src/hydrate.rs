//! Browser entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page loader script calls the exported [`hydrate`] once after the wasm
//! module initializes. It is the only code that reads the page-global
//! payload; [`mount`] takes the payload explicitly and hydrates [`App`] over
//! the server markup in `#root`. There is no re-render loop.

use leptos::prelude::*;
use state_api::InitialData;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::ROOT_ELEMENT_ID;
use crate::app::App;
use crate::payload::{INITIAL_DATA_GLOBAL, PayloadError, decode_initial_data};

/// Why the page could not be hydrated.
#[derive(Debug, thiserror::Error)]
pub enum HydrateError {
    /// No `window` or `document` (not running in a browser page).
    #[error("no browser window")]
    NoWindow,
    /// The server markup container is missing.
    #[error("no #{0} element in document")]
    MissingRoot(&'static str),
    /// The payload global was never assigned.
    #[error("window.{0} is not set")]
    MissingPayload(&'static str),
    /// The payload global could not be stringified.
    #[error("window.{0} could not be read as JSON")]
    UnreadablePayload(&'static str),
    /// The payload JSON did not decode.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Hydrate the article list in `#root` from `data`.
///
/// # Errors
///
/// Returns [`HydrateError::NoWindow`] or [`HydrateError::MissingRoot`] when
/// the document has no attachment point.
pub fn mount(data: InitialData) -> Result<(), HydrateError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(HydrateError::NoWindow)?;
    let root = document
        .get_element_by_id(ROOT_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(HydrateError::MissingRoot(ROOT_ELEMENT_ID))?;

    leptos::mount::hydrate_from(root, move || view! { <App data/> }).forget();
    Ok(())
}

/// Read the payload the server assigned to `window.initialData`.
///
/// # Errors
///
/// Returns an error if the global is missing, cannot be stringified, or
/// does not decode into a valid payload.
pub fn read_initial_data() -> Result<InitialData, HydrateError> {
    let window = web_sys::window().ok_or(HydrateError::NoWindow)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(INITIAL_DATA_GLOBAL))
        .map_err(|_| HydrateError::MissingPayload(INITIAL_DATA_GLOBAL))?;
    if value.is_undefined() || value.is_null() {
        return Err(HydrateError::MissingPayload(INITIAL_DATA_GLOBAL));
    }

    let json: String = js_sys::JSON::stringify(&value)
        .map(String::from)
        .map_err(|_| HydrateError::UnreadablePayload(INITIAL_DATA_GLOBAL))?;
    Ok(decode_initial_data(&json)?)
}

/// Wasm export invoked by the page loader.
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match read_initial_data().and_then(mount) {
        Ok(()) => log::info!("article list hydrated"),
        Err(e) => log::error!("hydration skipped: {e}"),
    }
}
