//! Configuration loading for the Interest Calculator server.
//!
//! This module loads the HTTP server settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use interest_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load_or_default("./config/server.yaml").unwrap();
//! println!("Binding to {}", config.bind_address);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{DEFAULT_BIND_ADDRESS, DEFAULT_LOG_FILTER, ServerConfig};
