//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, ExportConfig, StoreConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// store:
///   latency_ms: 0            # delay before each store mutation
///   seed_path: ./seed.json   # optional initial data
/// export:
///   output_dir: ./exports
///   sheet_name: Attendance
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hr-engine.yaml").unwrap();
/// println!("Exports go to {}", loader.export().output_dir.display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/hr-engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML or unknown value types
    ///   ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, "Loaded configuration");
        Ok(config)
    }

    /// Parses configuration from YAML text.
    pub fn parse(content: &str) -> EngineResult<Self> {
        // An empty file is treated as an empty mapping.
        let content = if content.trim().is_empty() { "{}" } else { content };

        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the store settings.
    pub fn store(&self) -> &StoreConfig {
        &self.config.store
    }

    /// Returns the export settings.
    pub fn export(&self) -> &ExportConfig {
        &self.config.export
    }
}
