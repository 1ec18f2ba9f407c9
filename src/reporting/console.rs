// src/reporting/console.rs
//! Build-log style console output.

use crate::engine::RunSummary;
use crate::events::{EventLogger, EventSink, RunEvent};
use colored::Colorize;

/// Prints events as they arrive and forwards them to the optional JSON log.
pub struct ConsoleSink {
    verbose: bool,
    logger: Option<EventLogger>,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(verbose: bool, logger: Option<EventLogger>) -> Self {
        Self { verbose, logger }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &RunEvent) {
        if let Some(logger) = &self.logger {
            logger.log(event);
        }
        print_event(event, self.verbose);
    }
}

fn print_event(event: &RunEvent, verbose: bool) {
    match event {
        RunEvent::FilesDiscovered { java, xml } => {
            if verbose {
                info(&format!("Scanning {java} java and {xml} xml files"));
            }
        }
        RunEvent::FileSkipped { path } => {
            if verbose {
                println!("{}", format!("  skipped {path}").dimmed());
            }
        }
        RunEvent::ParseFailed { path, error } => {
            warn(&format!("Error parsing java file {path} code due {error}"));
        }
        RunEvent::XmlUnsupported { files } => {
            if verbose {
                info(&format!("Skipping {files} xml files (XML routes are not analyzed)"));
            }
        }
        RunEvent::RoutesDiscovered { count } => info(&format!("Discovered {count} routes")),
        RunEvent::AnonymousRoutes { count } => warn(&format!(
            "Discovered {count} anonymous routes. Add route ids to these routes for route coverage support"
        )),
        RunEvent::TraceMissing { route_id } => warn(&format!(
            "No route coverage data found for route: {route_id}. Make sure to enable route coverage in your unit tests and assign unique route ids to your routes. Also remember to run unit tests first."
        )),
        RunEvent::RouteCovered { report, .. } => {
            info(&format!("Route coverage summary:\n\n{report}"));
        }
        // Fatal; the caller prints the error that ends the run.
        RunEvent::TraceFailed { .. } => {}
    }
}

fn info(msg: &str) {
    println!("{msg}");
}

fn warn(msg: &str) {
    eprintln!("{} {msg}", "warning:".yellow().bold());
}

/// Closing line for a finished run.
pub fn print_summary(summary: &RunSummary, fail_on_error: bool) {
    let reported = summary.reports.len();
    let failing = summary.not_fully_covered;

    if failing == 0 {
        println!(
            "{} {reported} route(s) reported, all fully covered.",
            "OK".green().bold()
        );
    } else if fail_on_error {
        println!(
            "{} {failing} of {reported} route(s) not fully covered.",
            "X".red().bold()
        );
    } else {
        println!(
            "{} {failing} of {reported} route(s) not fully covered.",
            "~".yellow().bold()
        );
    }

    for report in summary.reports.iter().filter(|r| !r.is_fully_covered()) {
        println!(
            "  {} {}%",
            report.route_id,
            super::format_percentage(report.covered, report.total)
        );
    }
}
