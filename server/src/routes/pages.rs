//! Page and data handlers.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use state_api::Fixture;

use crate::data::DataSourceError;
use crate::render::{RenderError, server_render};
use crate::state::AppState;
use crate::templates;

/// `GET /` — fetch the payload, render the article list, and wrap it in the
/// hydration document.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let page = server_render(state.source.as_ref()).await.map_err(|e| {
        tracing::error!(error = %e, "server render failed");
        render_error_to_status(&e)
    })?;

    let document = templates::index_document(&page, &state.config.assets).map_err(|e| {
        tracing::error!(error = %e, "page payload encode failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::debug!(articles = page.initial_data.len(), "index rendered");
    Ok(Html(document))
}

/// `GET /data` — the fixture in its wire shape.
pub async fn data(State(state): State<AppState>) -> Json<Fixture> {
    Json(state.fixture.as_ref().clone())
}

/// Upstream failures are a bad gateway; anything else is on this server.
pub(crate) fn render_error_to_status(err: &RenderError) -> StatusCode {
    match err {
        RenderError::Source(
            DataSourceError::Request(_) | DataSourceError::Status { .. } | DataSourceError::Parse(_),
        ) => StatusCode::BAD_GATEWAY,
        RenderError::Source(_) | RenderError::Data(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
