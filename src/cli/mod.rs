// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::{apply_overrides, handle_init, handle_report};
