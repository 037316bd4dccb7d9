//! Configuration file and setting resolution
//!
//! Settings resolve in this order: command line flag, environment variable
//! (both handled by clap), `~/.tunr/config.toml` (or `--config`), built-in
//! default.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:4567"
//! cors_permissive = false
//!
//! [database]
//! url = "postgres://localhost/tunr_db"
//! max_connections = 5
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tunr_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use tunr_server::http::server::DEFAULT_BIND;

/// Database used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/tunr_db";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TunrConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl TunrConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is optional; when it is
    /// absent every setting falls back to its default.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Get config file path: ~/.tunr/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tunr/config.toml")
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn database_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.database.url.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned())
    }

    pub fn max_connections(&self, flag: Option<u32>) -> u32 {
        flag.or(self.database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    pub fn bind(&self, flag: Option<SocketAddr>) -> SocketAddr {
        flag.or(self.server.bind).unwrap_or(DEFAULT_BIND)
    }

    pub fn cors_permissive(&self, flag: bool) -> bool {
        flag || self.server.cors_permissive.unwrap_or(false)
    }
}
