//! Application state for the HR engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::report::{Clock, SpreadsheetWriter, SystemClock, XlsxFileWriter};
use crate::store::Store;

/// Shared application state.
///
/// Holds the loaded configuration, the record store, the clock used to
/// resolve relative export periods, and the spreadsheet writer exports go
/// through.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<Store>,
    clock: Arc<dyn Clock>,
    writer: Arc<dyn SpreadsheetWriter>,
}

impl AppState {
    /// Creates application state from a configuration and a store.
    ///
    /// Exports are written as `.xlsx` files into the configured output
    /// directory, and periods are resolved against the system date.
    pub fn new(config: ConfigLoader, store: Store) -> Self {
        let writer = XlsxFileWriter::new(config.export().output_dir.clone());
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            clock: Arc::new(SystemClock),
            writer: Arc::new(writer),
        }
    }

    /// Creates application state, building the store from the configuration
    /// (including its seed file, if any).
    pub fn from_config(config: ConfigLoader) -> EngineResult<Self> {
        let store = Store::from_config(config.store())?;
        Ok(Self::new(config, store))
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replaces the spreadsheet writer.
    pub fn with_writer(mut self, writer: impl SpreadsheetWriter + 'static) -> Self {
        self.writer = Arc::new(writer);
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns a shared handle to the spreadsheet writer.
    pub fn writer(&self) -> Arc<dyn SpreadsheetWriter> {
        Arc::clone(&self.writer)
    }
}
