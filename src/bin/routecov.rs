// src/bin/routecov.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use routecov_core::cli::{self, Cli};
use routecov_core::exit::RouteCovExit;

fn main() -> RouteCovExit {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            RouteCovExit::Error
        }
    }
}

fn run() -> Result<RouteCovExit> {
    let cli = Cli::parse();
    if cli.init {
        return cli::handle_init(&cli.basedir);
    }
    cli::handle_report(&cli)
}
