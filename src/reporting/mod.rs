// src/reporting/mod.rs
//! Text rendering of route coverage.

pub mod console;

use crate::types::CoverageNode;
use std::fmt::Write;

pub use console::ConsoleSink;

/// Output of [`render`] for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRoute {
    pub text: String,
    pub covered: usize,
    pub total: usize,
    pub fully_covered: bool,
}

/// Formats one route's coverage as a fixed-width table with a summary line.
#[must_use]
pub fn render(file: &str, route_id: &str, nodes: &[CoverageNode]) -> RenderedRoute {
    let mut out = String::new();
    let _ = writeln!(out, "File: {file}");
    let _ = writeln!(out, "Route: {route_id}");
    out.push('\n');
    push_row(&mut out, "Line #", "Count", "Route");
    push_row(&mut out, "------", "-----", "-----");

    for node in nodes {
        let name = format!("{}{}", indent(node.level), node.name);
        push_row(&mut out, &node.line.to_string(), &node.count.to_string(), &name);
    }

    let covered = nodes.iter().filter(|n| n.is_covered()).count();
    let total = nodes.len();

    out.push('\n');
    let _ = writeln!(
        out,
        "Coverage: {covered} out of {total} ({}%)",
        format_percentage(covered, total)
    );
    out.push('\n');

    RenderedRoute {
        text: out,
        covered,
        total,
        fully_covered: covered == total,
    }
}

fn push_row(out: &mut String, line: &str, count: &str, name: &str) {
    let _ = writeln!(out, "{line:>8}   {count:>8}   {name}");
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Share of covered steps, in percent.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(covered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    covered as f64 / total as f64 * 100.0
}

/// Percentage with exactly one decimal; ties round up (12.25 -> "12.3").
#[must_use]
pub fn format_percentage(covered: usize, total: usize) -> String {
    let rounded = (percentage(covered, total) * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, line: usize, level: usize, count: u64) -> CoverageNode {
        CoverageNode {
            name: name.to_string(),
            line,
            level,
            count,
        }
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percentage(3, 4), "75.0");
        assert_eq!(format_percentage(2, 3), "66.7");
        assert_eq!(format_percentage(0, 5), "0.0");
        assert_eq!(format_percentage(2, 2), "100.0");
        assert_eq!(format_percentage(1, 16), "6.3");
    }

    #[test]
    fn table_layout() {
        let nodes = vec![
            node("from", 28, 0, 1),
            node("filter", 32, 1, 1),
            node("to", 34, 2, 0),
        ];
        let r = render("src/main/java/Sample.java", "hello", &nodes);
        let expected = "\
File: src/main/java/Sample.java
Route: hello

  Line #      Count   Route
  ------      -----   -----
      28          1   from
      32          1     filter
      34          0       to

Coverage: 2 out of 3 (66.7%)

";
        assert_eq!(r.text, expected);
        assert_eq!((r.covered, r.total, r.fully_covered), (2, 3, false));
    }
}
