//! Server entry point: fetch the payload, then render it.
//!
//! The returned [`RenderedPage`] carries both the markup and the payload it
//! was rendered from. The page template embeds the payload verbatim so the
//! browser hydrates with exactly the same data.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use client::render::render_app;
use state_api::{DataApi, DataError, Fixture, InitialData};

use crate::data::{DataSource, DataSourceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub initial_markup: String,
    pub initial_data: InitialData,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Source(#[from] DataSourceError),
    #[error("invalid data: {0}")]
    Data(#[from] DataError),
}

/// Await `source`, then render synchronously.
///
/// # Errors
///
/// Propagates the data source failure unchanged, or a validation error if
/// the fetched fixture is inconsistent.
pub async fn server_render(source: &dyn DataSource) -> Result<RenderedPage, RenderError> {
    let fixture = source.fetch().await?;
    Ok(render_fixture(fixture)?)
}

/// Validate a fixture and render it.
///
/// # Errors
///
/// Returns a [`DataError`] if the fixture fails validation.
pub fn render_fixture(fixture: Fixture) -> Result<RenderedPage, DataError> {
    let initial_data = DataApi::new(fixture)?.into_initial_data();
    let initial_markup = render_app(&initial_data);
    Ok(RenderedPage { initial_markup, initial_data })
}
