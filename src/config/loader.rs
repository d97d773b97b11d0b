//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the server
//! configuration from a YAML file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::types::ServerConfig;

/// Default location of the server configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config/server.yaml";

/// Loads the server configuration.
///
/// # Example
///
/// ```no_run
/// use interest_calculator::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/server.yaml")?;
/// println!("Listening on {}", config.bind_address);
/// # Ok::<(), interest_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the parsed `ServerConfig`, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or fields of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ServerConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads configuration from `path`, using defaults if the file is absent.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<ServerConfig> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Configuration file not found, using defaults");
                Ok(ServerConfig::default())
            }
            _ => Self::load(path),
        }
    }
}
