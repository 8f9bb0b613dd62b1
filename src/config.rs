//! Server configuration from the environment.
//!
//! `.env` is loaded first when present. Every variable has a default, so a
//! bare `folio` serves `client/dist` on port 3000.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected 0-65535")]
    Port { value: String },
    #[error("invalid BIND_ADDR {value:?}: expected an IP address")]
    BindAddr { value: String },
    #[error("SITE_DIR must not be empty")]
    EmptySiteDir,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory holding the built client bundle.
    pub site_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
        }
    }
}

impl ServerConfig {
    /// Load `.env` (if any) and read `PORT`, `BIND_ADDR` and `SITE_DIR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(error = %err, "ignoring unreadable .env");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Port { value })?,
            None => defaults.port,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value.trim().parse::<IpAddr>().map_err(|_| ConfigError::BindAddr { value })?,
            None => defaults.bind_addr,
        };
        let site_dir = match lookup("SITE_DIR") {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::EmptySiteDir),
            Some(value) => PathBuf::from(value.trim()),
            None => defaults.site_dir,
        };

        Ok(Self { bind_addr, port, site_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
