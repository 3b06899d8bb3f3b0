//! Data sources for the server render.
//!
//! DESIGN
//! ======
//! Rendering is split into an async fetch behind [`DataSource`] and a
//! synchronous render step. [`RemoteData`] calls the `/data` endpoint over
//! HTTP; [`StaticFixture`] hands back the fixture loaded at startup.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried and there is no fallback between sources. Timeouts are
//! whatever the `reqwest` client was built with.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use state_api::{DataApi, DataError, Fixture};

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    /// The HTTP request did not complete.
    #[error("data request failed: {0}")]
    Request(String),
    /// The data endpoint answered with a non-success status.
    #[error("data endpoint returned status {status}")]
    Status { status: u16 },
    /// The data endpoint answered with a body that is not a valid fixture.
    #[error("data response parse failed: {0}")]
    Parse(#[source] DataError),
    /// The fixture file could not be read.
    #[error("fixture read failed: {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    /// The fixture file is not a valid fixture.
    #[error("fixture invalid: {0}")]
    Invalid(#[from] DataError),
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Async provider of the raw fixture the page is rendered from.
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the fixture once.
    ///
    /// # Errors
    ///
    /// Returns a [`DataSourceError`] if the data cannot be obtained.
    async fn fetch(&self) -> Result<Fixture, DataSourceError>;
}

// =============================================================================
// REMOTE
// =============================================================================

/// Fixture fetched with `GET` from a data endpoint.
pub struct RemoteData {
    http: reqwest::Client,
    url: String,
}

impl RemoteData {
    /// Build a remote source for `url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::HttpClientBuild`] if the client fails to build.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DataSourceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| DataSourceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }
}

#[async_trait::async_trait]
impl DataSource for RemoteData {
    async fn fetch(&self) -> Result<Fixture, DataSourceError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DataSourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| DataSourceError::Request(e.to_string()))?;
        Fixture::from_json(&text).map_err(DataSourceError::Parse)
    }
}

// =============================================================================
// STATIC
// =============================================================================

/// The fixture held in memory.
pub struct StaticFixture {
    fixture: Arc<Fixture>,
}

impl StaticFixture {
    #[must_use]
    pub fn new(fixture: Arc<Fixture>) -> Self {
        Self { fixture }
    }
}

#[async_trait::async_trait]
impl DataSource for StaticFixture {
    async fn fetch(&self) -> Result<Fixture, DataSourceError> {
        Ok(self.fixture.as_ref().clone())
    }
}

/// Read and validate the fixture file served at `/data`.
///
/// # Errors
///
/// Returns [`DataSourceError::Read`] if the file cannot be read and
/// [`DataSourceError::Invalid`] if it is malformed or fails validation.
pub async fn load_fixture(path: &Path) -> Result<Fixture, DataSourceError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataSourceError::Read { path: path.to_path_buf(), source })?;
    let fixture = Fixture::from_json(&raw)?;
    DataApi::new(fixture.clone())?;
    Ok(fixture)
}
