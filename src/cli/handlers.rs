// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::config::{self, Config};
use crate::engine::CoverageEngine;
use crate::events::EventLogger;
use crate::exit::RouteCovExit;
use crate::parser::JavaRouteParser;
use crate::reporting::console::{self, ConsoleSink};
use crate::trace::DumpDirectory;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Layers command-line flags over the loaded configuration. Flags only ever
/// switch options on or replace values; they never reset file settings.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    config.fail_on_error |= cli.fail_on_error;
    config.include_test |= cli.include_test;
    config.verbose |= cli.verbose;
    if cli.includes.is_some() {
        config.includes.clone_from(&cli.includes);
    }
    if cli.excludes.is_some() {
        config.excludes.clone_from(&cli.excludes);
    }
    if let Some(dir) = &cli.dump_dir {
        config.dump_dir.clone_from(dir);
    }
    if cli.events.is_some() {
        config.event_log.clone_from(&cli.events);
    }
}

/// Handles `--init`.
///
/// # Errors
/// Returns error if the config file cannot be written.
pub fn handle_init(basedir: &Path) -> Result<RouteCovExit> {
    if config::io::write_default_config(basedir)? {
        println!("Created {}", basedir.join(config::CONFIG_FILE).display());
    } else {
        println!("{} already exists", config::CONFIG_FILE);
    }
    Ok(RouteCovExit::Success)
}

/// Handles the default report run.
///
/// # Errors
/// Returns error if coverage data for a route exists but cannot be read.
pub fn handle_report(cli: &Cli) -> Result<RouteCovExit> {
    let mut config = Config::load(&cli.basedir);
    apply_overrides(&mut config, cli);

    let parser = JavaRouteParser::new();
    let traces = DumpDirectory::new(config.dump_dir());
    let logger = config.event_log().map(|p| EventLogger::new(&p));
    if config.verbose {
        println!("Reading coverage dumps from {}", traces.dir().display());
        if let Some(logger) = &logger {
            println!("Writing run events to {}", logger.path().display());
        }
    }
    let mut sink = ConsoleSink::new(config.verbose, logger);

    let engine = CoverageEngine::new(&config, &parser, &traces);
    let summary = engine.run(&mut sink)?;
    console::print_summary(&summary, config.fail_on_error);

    if let Err(e) = summary.verdict(config.fail_on_error) {
        eprintln!("{} {e}", "error:".red().bold());
        return Ok(RouteCovExit::CoverageFailed);
    }
    Ok(RouteCovExit::Success)
}
