// src/exit.rs
//! Standardized process exit codes for `routecov`.
//!
//! Provides a stable contract for build scripts and CI gates.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RouteCovExit {
    /// Report produced; the coverage gate (if enabled) passed.
    Success = 0,
    /// Fatal error (trace retrieval, I/O, bad arguments).
    Error = 1,
    /// `fail_on_error` is set and some routes are not fully covered.
    CoverageFailed = 2,
}

impl RouteCovExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for RouteCovExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
