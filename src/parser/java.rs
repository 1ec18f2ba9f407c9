// src/parser/java.rs
//! Route trees from Java route builders.
//!
//! Every unqualified `from(...)` inside a `configure()` method starts a route.
//! The fluent chain built on top of it is flattened into calls and replayed
//! through a stack of open blocks to recover the nesting.

use super::eip::{self, Call};
use super::RouteTreeProvider;
use crate::error::ParseError;
use crate::types::{RouteNode, RouteTree};
use std::fs;
use std::path::Path;
use tree_sitter::{Node, Parser, Query, QueryCursor};

const CONFIGURE_QUERY: &str = r"
    (method_declaration
        name: (identifier) @name
        body: (block) @body)
";

#[derive(Debug, Default, Clone, Copy)]
pub struct JavaRouteParser;

impl JavaRouteParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses Java source text. `path` is only recorded on the trees.
    ///
    /// # Errors
    /// Returns error if the grammar cannot be loaded or the source has syntax errors.
    pub fn parse_source(&self, path: &Path, source: &str) -> Result<Vec<RouteTree>, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(tree_sitter_java::language())
            .map_err(|e| ParseError::Grammar(e.to_string()))?;

        let Some(tree) = parser.parse(source, None) else {
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: 1,
            });
        };

        let root = tree.root_node();
        if root.has_error() {
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: first_error_line(root).unwrap_or(1),
            });
        }

        let query = Query::new(tree_sitter_java::language(), CONFIGURE_QUERY)
            .map_err(|e| ParseError::Grammar(e.to_string()))?;
        let bodies = configure_bodies(&query, root, source);

        let mut routes = Vec::new();
        for body in bodies {
            let mut starts = Vec::new();
            collect_route_starts(body, source, &mut starts);
            for start in starts {
                let calls = flatten_chain(start, source);
                routes.push(RouteTree {
                    file: path.to_path_buf(),
                    root: build_tree(&calls),
                });
            }
        }
        Ok(routes)
    }
}

impl RouteTreeProvider for JavaRouteParser {
    fn parse(&self, path: &Path) -> Result<Vec<RouteTree>, ParseError> {
        let source = fs::read_to_string(path).map_err(|source| ParseError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        self.parse_source(path, &source)
    }
}

fn configure_bodies<'tree>(query: &Query, root: Node<'tree>, source: &str) -> Vec<Node<'tree>> {
    let (Some(name_idx), Some(body_idx)) = (
        query.capture_index_for_name("name"),
        query.capture_index_for_name("body"),
    ) else {
        return Vec::new();
    };

    let mut cursor = QueryCursor::new();
    let mut bodies = Vec::new();
    for m in cursor.matches(query, root, source.as_bytes()) {
        let is_configure = m
            .captures
            .iter()
            .any(|c| c.index == name_idx && text(c.node, source) == "configure");
        if !is_configure {
            continue;
        }
        if let Some(body) = m.captures.iter().find(|c| c.index == body_idx) {
            bodies.push(body.node);
        }
    }
    bodies
}

fn collect_route_starts<'tree>(node: Node<'tree>, source: &str, out: &mut Vec<Node<'tree>>) {
    if is_route_start(node, source) {
        out.push(node);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_route_starts(child, source, out);
    }
}

fn is_route_start(node: Node, source: &str) -> bool {
    node.kind() == "method_invocation"
        && node.child_by_field_name("object").is_none()
        && node
            .child_by_field_name("name")
            .is_some_and(|n| text(n, source) == "from")
}

/// One call of a fluent chain.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChainCall {
    name: String,
    line: usize,
    literal: Option<String>,
}

/// `from(..).a(..).b(..)` is nested as `b(a(from))`; walk outwards from `from`.
fn flatten_chain(start: Node, source: &str) -> Vec<ChainCall> {
    let mut calls = vec![chain_call(start, source)];
    let mut current = start;
    while let Some(parent) = current.parent() {
        if parent.kind() != "method_invocation" {
            break;
        }
        if parent.child_by_field_name("object") != Some(current) {
            break;
        }
        calls.push(chain_call(parent, source));
        current = parent;
    }
    calls
}

fn chain_call(node: Node, source: &str) -> ChainCall {
    let name_node = node.child_by_field_name("name");
    let name = name_node.map(|n| text(n, source)).unwrap_or_default();
    let line = name_node.map_or(node.start_position().row, |n| n.start_position().row) + 1;
    ChainCall {
        name: name.to_string(),
        line,
        literal: first_string_argument(node, source),
    }
}

fn first_string_argument(node: Node, source: &str) -> Option<String> {
    let args = node.child_by_field_name("arguments")?;
    let mut cursor = args.walk();
    let first = args.named_children(&mut cursor).next()?;
    if first.kind() != "string_literal" {
        return None;
    }
    Some(text(first, source).trim_matches('"').to_string())
}

fn text<'s>(node: Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

fn first_error_line(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error_line)
}

/// Arena node used while replaying a chain.
struct Draft {
    name: String,
    line: usize,
    children: Vec<usize>,
}

/// Replays chain calls against a stack of open blocks. `calls[0]` is `from`.
fn build_tree(calls: &[ChainCall]) -> RouteNode {
    let mut drafts: Vec<Draft> = Vec::with_capacity(calls.len());
    let mut route_id = None;
    let mut open: Vec<usize> = vec![0];

    let (first, rest) = match calls.split_first() {
        Some((first, rest)) => (first, rest),
        None => return RouteNode::new("from", 0),
    };
    drafts.push(Draft {
        name: first.name.clone(),
        line: first.line,
        children: Vec::new(),
    });

    for call in rest {
        match eip::classify(&call.name) {
            Call::RouteId => {
                if route_id.is_none() {
                    route_id.clone_from(&call.literal);
                }
            }
            Call::Leaf => {
                add_step(&mut drafts, &open, call);
            }
            Call::Block => {
                let idx = add_step(&mut drafts, &open, call);
                open.push(idx);
            }
            Call::Branch { owner } => {
                return_to_owner(&drafts, &mut open, owner);
                let idx = add_step(&mut drafts, &open, call);
                open.push(idx);
            }
            Call::End => close_block(&drafts, &mut open),
            Call::EndBranch { owner } => return_to_owner(&drafts, &mut open, owner),
            Call::Other => {}
        }
    }

    let mut root = assemble(&drafts, 0);
    root.route_id = route_id;
    root
}

fn add_step(drafts: &mut Vec<Draft>, open: &[usize], call: &ChainCall) -> usize {
    let idx = drafts.len();
    drafts.push(Draft {
        name: call.name.clone(),
        line: call.line,
        children: Vec::new(),
    });
    let parent = open.last().copied().unwrap_or(0);
    if let Some(p) = drafts.get_mut(parent) {
        p.children.push(idx);
    }
    idx
}

/// Truncates the open stack to the innermost block named `owner`, if any.
fn return_to_owner(drafts: &[Draft], open: &mut Vec<usize>, owner: &str) {
    let found = open
        .iter()
        .rposition(|&idx| drafts.get(idx).is_some_and(|d| d.name == owner));
    if let Some(pos) = found {
        open.truncate(pos + 1);
    }
}

/// Closes the innermost block; a branch closes together with its owner.
fn close_block(drafts: &[Draft], open: &mut Vec<usize>) {
    if open.len() <= 1 {
        return;
    }
    let closed = open.pop();
    let was_branch = closed
        .and_then(|idx| drafts.get(idx))
        .is_some_and(|d| eip::is_branch(&d.name));
    if was_branch && open.len() > 1 {
        open.pop();
    }
}

fn assemble(drafts: &[Draft], idx: usize) -> RouteNode {
    let Some(draft) = drafts.get(idx) else {
        return RouteNode::new("from", 0);
    };
    let children = draft
        .children
        .iter()
        .map(|&child| assemble(drafts, child))
        .collect();
    RouteNode::new(draft.name.clone(), draft.line).with_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, line: usize) -> ChainCall {
        ChainCall {
            name: name.to_string(),
            line,
            literal: None,
        }
    }

    fn shape(node: &RouteNode, level: usize, out: &mut Vec<String>) {
        out.push(format!("{}{}", "  ".repeat(level), node.name));
        for c in &node.children {
            shape(c, level + 1, out);
        }
    }

    fn shape_of(calls: &[ChainCall]) -> Vec<String> {
        let mut out = Vec::new();
        shape(&build_tree(calls), 0, &mut out);
        out
    }

    #[test]
    fn choice_branches_attach_to_choice() {
        let calls = vec![
            call("from", 1),
            call("choice", 2),
            call("when", 3),
            call("to", 4),
            call("when", 5),
            call("to", 6),
            call("otherwise", 7),
            call("log", 8),
            call("end", 9),
            call("to", 10),
        ];
        assert_eq!(
            shape_of(&calls),
            vec![
                "from",
                "  choice",
                "    when",
                "      to",
                "    when",
                "      to",
                "    otherwise",
                "      log",
                "  to",
            ]
        );
    }

    #[test]
    fn end_choice_returns_to_choice() {
        let calls = vec![
            call("from", 1),
            call("choice", 2),
            call("when", 3),
            call("split", 4),
            call("to", 5),
            call("endChoice", 6),
            call("otherwise", 7),
            call("to", 8),
        ];
        assert_eq!(
            shape_of(&calls),
            vec![
                "from",
                "  choice",
                "    when",
                "      split",
                "        to",
                "    otherwise",
                "      to",
            ]
        );
    }

    #[test]
    fn options_are_not_steps() {
        let calls = vec![
            call("from", 1),
            call("split", 2),
            call("streaming", 2),
            call("to", 3),
            call("end", 4),
            call("end", 5),
            call("to", 6),
        ];
        assert_eq!(shape_of(&calls), vec!["from", "  split", "    to", "  to"]);
    }

    #[test]
    fn first_route_id_wins() {
        let mut id = call("routeId", 1);
        id.literal = Some("orders".into());
        let mut other = call("routeId", 2);
        other.literal = Some("ignored".into());
        let root = build_tree(&[call("from", 1), id, other, call("to", 3)]);
        assert_eq!(root.route_id.as_deref(), Some("orders"));
        assert_eq!(root.node_count(), 2);
    }
}
