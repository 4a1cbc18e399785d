//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::sources::InMemoryPayrollSink;

/// Shared application state.
///
/// Holds the loaded payroll configuration and the store that confirmed runs
/// are saved to.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    sink: Arc<InMemoryPayrollSink>,
}

impl AppState {
    /// Creates a new application state with an empty run store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_sink(config, Arc::new(InMemoryPayrollSink::new()))
    }

    /// Creates a new application state saving runs into `sink`.
    pub fn with_sink(config: ConfigLoader, sink: Arc<InMemoryPayrollSink>) -> Self {
        Self {
            config: Arc::new(config),
            sink,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the run store.
    pub fn sink(&self) -> &InMemoryPayrollSink {
        &self.sink
    }
}
