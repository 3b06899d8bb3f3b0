//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::Ipv6Addr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_HOST: &str = "127.0.0.1";
pub const DEFAULT_DATA_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_OUTPUT_NAME: &str = "client";
pub const DEFAULT_SITE_TITLE: &str = "Articles";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("unknown DATA_SOURCE: {0} (expected 'remote' or 'fixture')")]
    UnknownDataSource(String),
}

/// Where the index route gets its render payload from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    /// HTTP `GET` against the configured data host/port.
    Remote,
    /// The fixture loaded at startup, without a network hop.
    Fixture,
}

/// Static asset locations and page chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub public_dir: PathBuf,
    pub pkg_dir: PathBuf,
    pub output_name: String,
    pub site_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_source: DataSourceKind,
    pub data_host: String,
    pub data_port: u16,
    pub data_timeout_secs: u64,
    pub fixture_path: PathBuf,
    pub assets: AssetConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// All variables are optional:
    /// - `HOST` / `PORT`: bind address, default `0.0.0.0:8080`
    /// - `DATA_SOURCE`: `remote` (default) or `fixture`
    /// - `DATA_HOST` / `DATA_PORT`: remote data endpoint, default `127.0.0.1:$PORT`
    /// - `DATA_TIMEOUT_SECS`: remote request timeout, default 10
    /// - `FIXTURE_PATH`: default `data/testData.json` in this crate
    /// - `PUBLIC_DIR`: default `public/` in this crate
    /// - `PKG_DIR`: wasm bundle directory, default `target/site/pkg`
    /// - `OUTPUT_NAME`: wasm-bindgen output name, default `client`
    /// - `SITE_TITLE`: document title, default `Articles`
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or
    /// `DATA_SOURCE` names an unknown source.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let data_source = parse_data_source(lookup("DATA_SOURCE").as_deref())?;
        let data_host = lookup("DATA_HOST").unwrap_or_else(|| DEFAULT_DATA_HOST.to_owned());
        let data_port = parse_or("DATA_PORT", lookup("DATA_PORT"), port)?;
        let data_timeout_secs = parse_or("DATA_TIMEOUT_SECS", lookup("DATA_TIMEOUT_SECS"), DEFAULT_DATA_TIMEOUT_SECS)?;
        if data_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "DATA_TIMEOUT_SECS", value: "0".to_owned() });
        }

        let fixture_path = path_or(lookup("FIXTURE_PATH"), "data/testData.json");
        let assets = AssetConfig {
            public_dir: path_or(lookup("PUBLIC_DIR"), "public"),
            pkg_dir: path_or(lookup("PKG_DIR"), "../target/site/pkg"),
            output_name: lookup("OUTPUT_NAME").unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_owned()),
            site_title: lookup("SITE_TITLE").unwrap_or_else(|| DEFAULT_SITE_TITLE.to_owned()),
        };

        Ok(Self { host, port, data_source, data_host, data_port, data_timeout_secs, fixture_path, assets })
    }

    /// Address the listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        host_port(&self.host, self.port)
    }

    /// URL of the remote data endpoint.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("http://{}/data", host_port(&self.data_host, self.data_port))
    }
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_data_source(raw: Option<&str>) -> Result<DataSourceKind, ConfigError> {
    match raw.unwrap_or("remote") {
        "remote" => Ok(DataSourceKind::Remote),
        "fixture" => Ok(DataSourceKind::Fixture),
        other => Err(ConfigError::UnknownDataSource(other.to_owned())),
    }
}

/// `host:port`, with bare IPv6 literals bracketed.
fn host_port(host: &str, port: u16) -> String {
    if host.parse::<Ipv6Addr>().is_ok() {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Explicit paths are used as given; defaults resolve against this crate.
fn path_or(raw: Option<String>, default: &str) -> PathBuf {
    raw.map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(default), PathBuf::from)
}
