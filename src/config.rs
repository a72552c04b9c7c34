//! Service configuration file support.
//!
//! Settings are read from a TOML file (path in `SHOT_TRACKER_CONFIG`) and
//! then overridden by the `HOST`, `PORT` and `RUST_LOG` environment
//! variables. Every field has a default, so an empty file is valid.
//! `server.host` may be an IP literal or a hostname such as `localhost`;
//! hostnames are resolved when the server binds.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 9000
//!
//! [ballistics]
//! wind_model = "time_of_flight"
//!
//! [logging]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
#[cfg(feature = "http-server")]
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::wind::WindDriftModel;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "SHOT_TRACKER_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub ballistics: BallisticsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BallisticsSettings {
    /// Model used when a request does not name one
    #[serde(default)]
    pub wind_model: WindDriftModel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `shot_tracker=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServiceConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `SHOT_TRACKER_CONFIG` (or defaults) and apply env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("RUST_LOG").ok(),
        )?;
        Ok(config)
    }

    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
        log_level: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Resolve `server.host` and `server.port` to the first socket address.
    #[cfg(feature = "http-server")]
    pub async fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.server.host.as_str();
        let mut addrs = tokio::net::lookup_host((host, self.server.port))
            .await
            .map_err(|source| ConfigError::Resolve {
                host: host.to_string(),
                source,
            })?;
        addrs.next().ok_or_else(|| ConfigError::InvalidValue {
            key: "server.host",
            value: host.to_string(),
        })
    }
}
