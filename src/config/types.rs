//! Configuration types for the Interest Calculator server.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;

/// Default address the HTTP server listens on.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration.
///
/// Every field is optional in the YAML file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind (e.g. `"127.0.0.1:8080"`).
    pub bind_address: String,
    /// Tracing filter directive (e.g. `"interest_calculator=debug"`).
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
