//! Configuration types for the HR engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field has a default, so an empty file is a valid configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::report::ATTENDANCE_SHEET;

/// Store behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Artificial delay applied before each mutation, in milliseconds.
    pub latency_ms: u64,
    /// Optional JSON file with initial employees, attendance and salary
    /// records.
    pub seed_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Returns the mutation latency as a [`Duration`].
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Export behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory that exported workbooks are written to.
    pub output_dir: PathBuf,
    /// Worksheet name used for attendance exports.
    pub sheet_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./exports"),
            sheet_name: ATTENDANCE_SHEET.to_string(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Store settings.
    pub store: StoreConfig,
    /// Export settings.
    pub export: ExportConfig,
}
