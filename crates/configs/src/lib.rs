//! # configs
//!
//! Typed runtime settings. The backend has always listened on one fixed
//! local port, so the built-in defaults are the whole configuration; an
//! optional `haven-board.toml` in the working directory can override them
//! for local setups. Server settings are never read from the environment.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Listen address settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

impl AppConfig {
    /// Built-in defaults overlaid with an optional `haven-board.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000_i64)?
            .add_source(config::File::with_name("haven-board").required(false))
            .build()?;

        let app: AppConfig = settings.try_deserialize()?;
        debug!(host = %app.server.host, port = app.server.port, "settings resolved");
        Ok(app)
    }

    /// The `host:port` string handed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
