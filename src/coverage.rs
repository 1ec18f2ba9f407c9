// src/coverage.rs
//! Merges a parsed route tree with its execution dump.
//!
//! The dump is a flat list ordered by runtime visitation, not keyed by tree
//! position, so steps are matched positionally: one forward-only cursor is
//! shared by the whole pre-order walk. A record skipped over while searching
//! for a name is forfeited, and once the dump runs out every remaining step
//! is left at zero. A single missing visit therefore desynchronizes the rest
//! of the route; the report shows that as uncovered steps.

use crate::types::{CoverageNode, RouteNode, TraceRecord};

/// Walks `root` in pre-order and decorates every node with its depth and hit count.
///
/// The result always has exactly `root.node_count()` entries.
#[must_use]
pub fn aggregate(root: &RouteNode, trace: &[TraceRecord]) -> Vec<CoverageNode> {
    let mut walk = Walk {
        trace,
        cursor: 0,
        out: Vec::with_capacity(root.node_count()),
    };
    walk.visit(root, 0);
    walk.out
}

struct Walk<'a> {
    trace: &'a [TraceRecord],
    cursor: usize,
    out: Vec<CoverageNode>,
}

impl Walk<'_> {
    fn visit(&mut self, node: &RouteNode, level: usize) {
        let count = self.take(&node.name).unwrap_or(0);
        self.out.push(CoverageNode {
            name: node.name.clone(),
            line: node.line,
            level,
            count,
        });

        for child in &node.children {
            self.visit(child, level + 1);
        }
    }

    /// Consumes the first record at or after the cursor named `name`.
    /// On a miss the cursor ends up past the last record.
    fn take(&mut self, name: &str) -> Option<u64> {
        while let Some(record) = self.trace.get(self.cursor) {
            self.cursor += 1;
            if record.name == name {
                return Some(record.count);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, count: u64) -> TraceRecord {
        TraceRecord::new(name, count)
    }

    fn summary(nodes: &[CoverageNode]) -> Vec<(&str, usize, u64)> {
        nodes
            .iter()
            .map(|n| (n.name.as_str(), n.level, n.count))
            .collect()
    }

    #[test]
    fn matches_in_order() {
        let tree = RouteNode::new("A", 1)
            .with_children(vec![RouteNode::new("B", 2), RouteNode::new("C", 3)]);
        let out = aggregate(&tree, &[rec("A", 5), rec("B", 0), rec("C", 2)]);
        assert_eq!(summary(&out), vec![("A", 0, 5), ("B", 1, 0), ("C", 1, 2)]);
        assert_eq!(out[2].line, 3);
    }

    #[test]
    fn duplicate_names_do_not_rewind() {
        let tree = RouteNode::new("A", 1)
            .with_children(vec![RouteNode::new("X", 2), RouteNode::new("X", 3)]);
        let out = aggregate(&tree, &[rec("A", 1), rec("X", 3)]);
        assert_eq!(summary(&out), vec![("A", 0, 1), ("X", 1, 3), ("X", 1, 0)]);
    }

    #[test]
    fn miss_exhausts_the_trace() {
        let tree = RouteNode::new("A", 1).with_children(vec![
            RouteNode::new("missing", 2),
            RouteNode::new("B", 3),
        ]);
        let out = aggregate(&tree, &[rec("A", 1), rec("B", 4)]);
        assert_eq!(
            summary(&out),
            vec![("A", 0, 1), ("missing", 1, 0), ("B", 1, 0)]
        );
    }

    #[test]
    fn skipped_records_are_forfeited() {
        let tree = RouteNode::new("A", 1)
            .with_children(vec![RouteNode::new("C", 2), RouteNode::new("B", 3)]);
        let out = aggregate(&tree, &[rec("A", 1), rec("B", 7), rec("C", 2)]);
        assert_eq!(summary(&out), vec![("A", 0, 1), ("C", 1, 2), ("B", 1, 0)]);
    }

    #[test]
    fn levels_restore_after_subtree() {
        let tree = RouteNode::new("from", 1).with_children(vec![
            RouteNode::new("filter", 2).with_children(vec![RouteNode::new("to", 3)]),
            RouteNode::new("to", 4),
        ]);
        let out = aggregate(&tree, &[]);
        let levels: Vec<usize> = out.iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 1]);
        assert!(out.iter().all(|n| !n.is_covered()));
    }
}
