//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` is the server-rendered article list, `/data` serves the fixture the
//! remote data source fetches, and `/pkg` serves the wasm bundle used for
//! hydration. Anything else falls through to the public static directory.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let assets = &state.config.assets;
    let pkg_service = ServeDir::new(&assets.pkg_dir);
    let public_service = ServeDir::new(&assets.public_dir);

    Router::new()
        .route("/", get(pages::index))
        .route("/data", get(pages::data))
        .route("/healthz", get(healthz))
        .nest_service("/pkg", pkg_service)
        .fallback_service(public_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
