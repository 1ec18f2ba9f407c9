// src/events.rs
//! Run events and the sinks that record them.
//!
//! The engine reports progress as [`RunEvent`]s while it works. The console
//! sink prints them; [`EventLogger`] appends them as JSON lines for audit
//! trails.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunEvent {
    FilesDiscovered {
        java: usize,
        xml: usize,
    },
    FileSkipped {
        path: String,
    },
    ParseFailed {
        path: String,
        error: String,
    },
    XmlUnsupported {
        files: usize,
    },
    RoutesDiscovered {
        count: usize,
    },
    AnonymousRoutes {
        count: usize,
    },
    TraceMissing {
        route_id: String,
    },
    RouteCovered {
        route_id: String,
        file: String,
        covered: usize,
        total: usize,
        report: String,
    },
    TraceFailed {
        route_id: String,
        error: String,
    },
}

impl RunEvent {
    /// True for events that a user should notice (printed as warnings).
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::ParseFailed { .. } | Self::AnonymousRoutes { .. } | Self::TraceMissing { .. }
        )
    }
}

/// Receives events in the order they happen.
pub trait EventSink {
    fn emit(&mut self, event: &RunEvent);
}

impl EventSink for Vec<RunEvent> {
    fn emit(&mut self, event: &RunEvent) {
        self.push(event.clone());
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub timestamp: u64,
    pub kind: RunEvent,
}

#[derive(Debug, Clone)]
pub struct EventLogger {
    log_path: PathBuf,
}

impl EventLogger {
    #[must_use]
    pub fn new(log_path: &Path) -> Self {
        Self {
            log_path: log_path.to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(&self, kind: &RunEvent) {
        // Best-effort: an unwritable log never stops a coverage run.
        if let Ok(json) = Self::serialize_event(kind) {
            let _ = self.append_to_file(&json);
        }
    }

    fn serialize_event(kind: &RunEvent) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = LoggedEvent {
            timestamp,
            kind: kind.clone(),
        };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

impl EventSink for EventLogger {
    fn emit(&mut self, event: &RunEvent) {
        self.log(event);
    }
}
