//! Configuration loading and management for the HR engine.
//!
//! This module loads the engine configuration from a YAML file: store
//! latency and seed data location, and export output settings.
//!
//! # Example
//!
//! ```no_run
//! use hr_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hr-engine.yaml").unwrap();
//! println!("Store latency: {:?}", config.store().latency());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, ExportConfig, StoreConfig};
