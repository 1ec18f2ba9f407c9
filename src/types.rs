// src/types.rs
use std::path::PathBuf;

/// One processing step of a parsed route and the steps nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pub name: String,
    pub line: usize,
    pub route_id: Option<String>,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Creates a leaf node without a route id.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
            route_id: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RouteNode::node_count).sum::<usize>()
    }
}

/// A route tree together with the source file it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTree {
    pub file: PathBuf,
    pub root: RouteNode,
}

impl RouteTree {
    #[must_use]
    pub fn route_id(&self) -> Option<&str> {
        self.root.route_id.as_deref()
    }
}

/// One `(step name, hit count)` pair from an execution dump, in visit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub name: String,
    pub count: u64,
}

impl TraceRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// A route step decorated with its depth and the hits recorded for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageNode {
    pub name: String,
    pub line: usize,
    pub level: usize,
    pub count: u64,
}

impl CoverageNode {
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.count > 0
    }
}

/// Coverage results for a single route.
#[derive(Debug, Clone)]
pub struct RouteCoverageReport {
    pub route_id: String,
    pub file: String,
    pub nodes: Vec<CoverageNode>,
    pub covered: usize,
    pub total: usize,
    pub text: String,
}

impl RouteCoverageReport {
    /// Returns true if every step was hit at least once.
    #[must_use]
    pub fn is_fully_covered(&self) -> bool {
        self.covered == self.total
    }
}
