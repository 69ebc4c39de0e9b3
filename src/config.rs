//! Configuration management for the Switchboard server.
//!
//! This module handles loading and validating configuration from
//! environment variables, with `.env` support for local development.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Configuration for the Switchboard server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the departments JSON dataset
    pub dataset_path: String,

    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Debounce wait window in milliseconds, advertised to UI clients
    pub debounce_wait_ms: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SWITCHBOARD_DATASET`: path to the departments JSON file
    ///
    /// Optional environment variables:
    /// - `SWITCHBOARD_BIND`: listen address (default: 127.0.0.1:8080)
    /// - `DEBOUNCE_WAIT_MS`: debounce window in milliseconds (default: 250)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, but don't fail when it is absent.
        let _ = dotenvy::dotenv();

        let dataset_path = env::var("SWITCHBOARD_DATASET")
            .map_err(|_| ConfigError::MissingVar("SWITCHBOARD_DATASET".to_string()))?;

        if dataset_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SWITCHBOARD_DATASET".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bind_raw =
            env::var("SWITCHBOARD_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "SWITCHBOARD_BIND".to_string(),
                reason: format!("Must be a socket address, got: {}", bind_raw),
            })?;

        let debounce_wait_ms = Self::parse_env_u64("DEBOUNCE_WAIT_MS", 250)?;
        if debounce_wait_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DEBOUNCE_WAIT_MS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            dataset_path,
            bind_addr,
            debounce_wait_ms,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: String::new(),
            bind_addr: "127.0.0.1:8080".parse().expect("valid default address"),
            debounce_wait_ms: 250,
            log_level: "info".to_string(),
        }
    }
}
