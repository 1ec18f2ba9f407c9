// src/engine.rs
//! Drives a coverage run: discovery, filtering, parsing, per-route
//! aggregation and rendering.

use crate::config::Config;
use crate::coverage;
use crate::discovery::{self, Discovered};
use crate::error::{CoverageError, Result};
use crate::events::{EventSink, RunEvent};
use crate::filter::{normalize_path, relative_to};
use crate::parser::RouteTreeProvider;
use crate::reporting;
use crate::trace::TraceProvider;
use crate::types::{RouteCoverageReport, RouteTree};
use std::path::{Path, PathBuf};

/// What a finished run found.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub discovered_routes: usize,
    pub anonymous_routes: usize,
    pub parse_failures: usize,
    pub missing_traces: Vec<String>,
    pub reports: Vec<RouteCoverageReport>,
    pub not_fully_covered: usize,
}

impl RunSummary {
    /// The pass/fail decision for the run.
    ///
    /// # Errors
    /// Returns [`CoverageError::NotFullyCovered`] when `fail_on_error` is set
    /// and at least one reported route is not fully covered.
    pub fn verdict(&self, fail_on_error: bool) -> Result<()> {
        verdict(fail_on_error, self.not_fully_covered)
    }
}

/// # Errors
/// Returns [`CoverageError::NotFullyCovered`] when the gate is on and `not_fully_covered > 0`.
pub fn verdict(fail_on_error: bool, not_fully_covered: usize) -> Result<()> {
    if fail_on_error && not_fully_covered > 0 {
        return Err(CoverageError::NotFullyCovered {
            count: not_fully_covered,
        });
    }
    Ok(())
}

/// Outcome of one named route.
enum RouteOutcome {
    Missing(String),
    Reported(RouteCoverageReport),
}

pub struct CoverageEngine<'a> {
    config: &'a Config,
    parser: &'a dyn RouteTreeProvider,
    traces: &'a dyn TraceProvider,
}

impl<'a> CoverageEngine<'a> {
    #[must_use]
    pub fn new(
        config: &'a Config,
        parser: &'a dyn RouteTreeProvider,
        traces: &'a dyn TraceProvider,
    ) -> Self {
        Self {
            config,
            parser,
            traces,
        }
    }

    /// Runs the whole pipeline, reporting progress to `sink` as it goes.
    ///
    /// # Errors
    /// Aborts with [`CoverageError::TraceRetrieval`] on the first route whose
    /// dump data exists but cannot be read.
    pub fn run(&self, sink: &mut dyn EventSink) -> Result<RunSummary> {
        let found = discovery::discover(&self.config.layout, self.config.include_test);
        sink.emit(&RunEvent::FilesDiscovered {
            java: found.java.len(),
            xml: found.xml.len(),
        });

        let (java, xml) = self.apply_filter(found, sink);
        if !xml.is_empty() {
            sink.emit(&RunEvent::XmlUnsupported { files: xml.len() });
        }

        let (trees, parse_failures) = self.parse_all(&java, sink);
        sink.emit(&RunEvent::RoutesDiscovered { count: trees.len() });

        let discovered_routes = trees.len();
        let (named, anonymous): (Vec<RouteTree>, Vec<RouteTree>) =
            trees.into_iter().partition(|t| t.route_id().is_some());
        if !anonymous.is_empty() {
            sink.emit(&RunEvent::AnonymousRoutes {
                count: anonymous.len(),
            });
        }

        let outcomes = self.cover_routes(&named, sink)?;
        Ok(summarize(
            outcomes,
            discovered_routes,
            anonymous.len(),
            parse_failures,
        ))
    }

    fn apply_filter(
        &self,
        found: Discovered,
        sink: &mut dyn EventSink,
    ) -> (Vec<PathBuf>, Vec<PathBuf>) {
        let filter = self.config.file_filter();
        let mut keep = |paths: Vec<PathBuf>| -> Vec<PathBuf> {
            paths
                .into_iter()
                .filter(|p| {
                    let ok = filter.matches(p);
                    if !ok {
                        sink.emit(&RunEvent::FileSkipped {
                            path: self.label(p),
                        });
                    }
                    ok
                })
                .collect()
        };
        let java = keep(found.java);
        let xml = keep(found.xml);
        (java, xml)
    }

    /// Parses every file; a file that fails is reported and skipped.
    fn parse_all(&self, files: &[PathBuf], sink: &mut dyn EventSink) -> (Vec<RouteTree>, usize) {
        let mut trees = Vec::new();
        let mut failures = 0;
        for file in files {
            match self.parser.parse(file) {
                Ok(found) => trees.extend(found),
                Err(e) => {
                    failures += 1;
                    sink.emit(&RunEvent::ParseFailed {
                        path: file.display().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }
        (trees, failures)
    }

    fn cover_routes(
        &self,
        routes: &[RouteTree],
        sink: &mut dyn EventSink,
    ) -> Result<Vec<RouteOutcome>> {
        routes
            .iter()
            .filter_map(|tree| tree.route_id().map(|id| (id, tree)))
            .map(|(route_id, tree)| self.cover_route(route_id, tree, &mut *sink))
            .collect()
    }

    fn cover_route(
        &self,
        route_id: &str,
        tree: &RouteTree,
        sink: &mut dyn EventSink,
    ) -> Result<RouteOutcome> {
        let trace = match self.traces.load(route_id) {
            Ok(trace) => trace,
            Err(source) => {
                sink.emit(&RunEvent::TraceFailed {
                    route_id: route_id.to_string(),
                    error: source.to_string(),
                });
                return Err(CoverageError::TraceRetrieval {
                    route_id: route_id.to_string(),
                    source,
                });
            }
        };

        if trace.is_empty() {
            sink.emit(&RunEvent::TraceMissing {
                route_id: route_id.to_string(),
            });
            return Ok(RouteOutcome::Missing(route_id.to_string()));
        }

        let file = self.label(&tree.file);
        let nodes = coverage::aggregate(&tree.root, &trace);
        let rendered = reporting::render(&file, route_id, &nodes);

        sink.emit(&RunEvent::RouteCovered {
            route_id: route_id.to_string(),
            file: file.clone(),
            covered: rendered.covered,
            total: rendered.total,
            report: rendered.text.clone(),
        });

        Ok(RouteOutcome::Reported(RouteCoverageReport {
            route_id: route_id.to_string(),
            file,
            nodes,
            covered: rendered.covered,
            total: rendered.total,
            text: rendered.text,
        }))
    }

    fn label(&self, path: &Path) -> String {
        normalize_path(&relative_to(path, &self.config.layout.basedir))
    }
}

fn summarize(
    outcomes: Vec<RouteOutcome>,
    discovered_routes: usize,
    anonymous_routes: usize,
    parse_failures: usize,
) -> RunSummary {
    let init = RunSummary {
        discovered_routes,
        anonymous_routes,
        parse_failures,
        ..RunSummary::default()
    };
    outcomes
        .into_iter()
        .fold(init, |mut summary, outcome| {
            match outcome {
                RouteOutcome::Missing(id) => summary.missing_traces.push(id),
                RouteOutcome::Reported(report) => {
                    if !report.is_fully_covered() {
                        summary.not_fully_covered += 1;
                    }
                    summary.reports.push(report);
                }
            }
            summary
        })
}
