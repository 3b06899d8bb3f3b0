//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! read-only: the config, the fixture served at `/data`, and the data source
//! the index route renders from. Requests share nothing mutable.

use std::sync::Arc;
use std::time::Duration;

use state_api::Fixture;

use crate::config::{DataSourceKind, ServerConfig};
use crate::data::{DataSource, DataSourceError, RemoteData, StaticFixture};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub fixture: Arc<Fixture>,
    pub source: Arc<dyn DataSource>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, fixture: Fixture, source: Arc<dyn DataSource>) -> Self {
        Self { config: Arc::new(config), fixture: Arc::new(fixture), source }
    }

    /// Build state with the data source selected by `config.data_source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote HTTP client cannot be built.
    pub fn from_config(config: ServerConfig, fixture: Fixture) -> Result<Self, DataSourceError> {
        let fixture = Arc::new(fixture);
        let source: Arc<dyn DataSource> = match config.data_source {
            DataSourceKind::Remote => Arc::new(RemoteData::new(
                config.data_url(),
                Duration::from_secs(config.data_timeout_secs),
            )?),
            DataSourceKind::Fixture => Arc::new(StaticFixture::new(Arc::clone(&fixture))),
        };
        Ok(Self { config: Arc::new(config), fixture, source })
    }
}
