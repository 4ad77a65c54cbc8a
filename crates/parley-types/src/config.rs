//! Server configuration types for Parley.
//!
//! `ServerConfig` represents `config.toml`. Every field has a default, so an
//! empty or partial file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Parley server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite connection URL. When unset the database lives in the data directory.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Upper bound on the time spent handling a single request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    15
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
