//! Configuration Module
//!
//! Loads cache and server settings from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache and server configuration.
///
/// Every value can be overridden via environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entry time-to-live in milliseconds, also the reaper period
    pub ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 5000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_ms: parse_env("CACHE_TTL_MS").unwrap_or(defaults.ttl_ms),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }

    /// Entry time-to-live as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Rejects settings the server cannot run with.
    ///
    /// A zero TTL is legal for the library but useless for a server, so it is
    /// refused here.
    pub fn validate(&self) -> Result<()> {
        if self.ttl_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "CACHE_TTL_MS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_ms: 5000,
            server_port: 3000,
        }
    }
}
