// src/trace/mod.rs
//! Trace providers: execution dumps recorded while the tests ran.

pub mod dump;

use crate::error::TraceError;
use crate::types::TraceRecord;
use std::collections::HashMap;

pub use dump::DumpDirectory;

/// Loads the ordered hit records for one route.
pub trait TraceProvider {
    /// An empty list means no data was recorded for the route.
    ///
    /// # Errors
    /// Returns error if existing dump data cannot be read.
    fn load(&self, route_id: &str) -> Result<Vec<TraceRecord>, TraceError>;
}

/// Traces held in memory, keyed by route id.
#[derive(Debug, Clone, Default)]
pub struct MemoryTraces {
    routes: HashMap<String, Vec<TraceRecord>>,
}

impl MemoryTraces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_route(mut self, route_id: &str, records: Vec<TraceRecord>) -> Self {
        self.routes.insert(route_id.to_string(), records);
        self
    }
}

impl TraceProvider for MemoryTraces {
    fn load(&self, route_id: &str) -> Result<Vec<TraceRecord>, TraceError> {
        Ok(self.routes.get(route_id).cloned().unwrap_or_default())
    }
}
