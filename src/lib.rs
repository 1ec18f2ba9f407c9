//! routecov - route coverage reports for Java route builders.
//!
//! Reconciles statically parsed route trees with the execution dumps recorded
//! while the tests ran, and reports per route which steps were never hit.
//!
//! ```ignore
//! use routecov_core::{config::Config, engine::CoverageEngine};
//! use routecov_core::{parser::JavaRouteParser, trace::DumpDirectory};
//!
//! let config = Config::load(Path::new("."));
//! let traces = DumpDirectory::new(config.dump_dir());
//! let mut events = Vec::new();
//! let summary = CoverageEngine::new(&config, &JavaRouteParser, &traces).run(&mut events)?;
//! summary.verdict(config.fail_on_error)?;
//! ```

pub mod cli;
pub mod config;
pub mod coverage;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod events;
pub mod exit;
pub mod filter;
pub mod parser;
pub mod pattern;
pub mod reporting;
pub mod trace;
pub mod types;
