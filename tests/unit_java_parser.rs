// tests/unit_java_parser.rs
use routecov_core::error::ParseError;
use routecov_core::parser::{JavaRouteParser, RouteTreeProvider};
use routecov_core::types::RouteNode;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ORDER_ROUTE: &str = r#"package sample;

import org.apache.camel.builder.RouteBuilder;

public class OrderRoute extends RouteBuilder {
    @Override
    public void configure() throws Exception {
        from("direct:orders").routeId("orders")
            .choice()
                .when(header("type").isEqualTo("x"))
                    .to("mock:x")
                .otherwise()
                    .to("mock:y")
            .end()
            .log("done");

        from("direct:anon")
            .to("mock:anon");
    }
}
"#;

fn shape(node: &RouteNode, level: usize, out: &mut Vec<String>) {
    out.push(format!("{}{}@{}", "  ".repeat(level), node.name, node.line));
    for child in &node.children {
        shape(child, level + 1, out);
    }
}

fn shape_of(node: &RouteNode) -> Vec<String> {
    let mut out = Vec::new();
    shape(node, 0, &mut out);
    out
}

#[test]
fn test_parses_every_route_in_configure() {
    let trees = JavaRouteParser::new()
        .parse_source(Path::new("OrderRoute.java"), ORDER_ROUTE)
        .unwrap();
    assert_eq!(trees.len(), 2);

    let orders = &trees[0];
    assert_eq!(orders.route_id(), Some("orders"));
    assert_eq!(
        shape_of(&orders.root),
        vec![
            "from@8",
            "  choice@9",
            "    when@10",
            "      to@11",
            "    otherwise@12",
            "      to@13",
            "  log@15",
        ]
    );

    let anon = &trees[1];
    assert_eq!(anon.route_id(), None);
    assert_eq!(shape_of(&anon.root), vec!["from@17", "  to@18"]);
}

#[test]
fn test_ignores_methods_other_than_configure() {
    let source = r#"
public class Helper extends RouteBuilder {
    public void configure() {
        from("direct:a").routeId("a").to("mock:a");
    }

    void unrelated() {
        from("direct:b").routeId("b").to("mock:b");
    }
}
"#;
    let trees = JavaRouteParser::new()
        .parse_source(Path::new("Helper.java"), source)
        .unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].route_id(), Some("a"));
}

#[test]
fn test_class_without_routes() {
    let source = "public class Plain { int answer() { return 42; } }";
    let trees = JavaRouteParser::new()
        .parse_source(Path::new("Plain.java"), source)
        .unwrap();
    assert!(trees.is_empty());
}

#[test]
fn test_non_literal_route_id_is_anonymous() {
    let source = r#"
public class Dynamic extends RouteBuilder {
    public void configure() {
        from("direct:a").routeId(ID).to("mock:a");
    }
}
"#;
    let trees = JavaRouteParser::new()
        .parse_source(Path::new("Dynamic.java"), source)
        .unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].route_id(), None);
    assert_eq!(trees[0].root.node_count(), 2);
}

#[test]
fn test_syntax_error_is_reported() {
    let source = "public class Broken {\n    public void configure() {\n        from(\"a\").to(\n    }\n";
    let err = JavaRouteParser::new()
        .parse_source(Path::new("Broken.java"), source)
        .unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

#[test]
fn test_reads_from_disk_and_records_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("OrderRoute.java");
    fs::write(&path, ORDER_ROUTE)?;

    let trees = JavaRouteParser::new().parse(&path)?;
    assert_eq!(trees.len(), 2);
    assert!(trees.iter().all(|t| t.file == path));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = JavaRouteParser::new()
        .parse(Path::new("/definitely/not/here/Route.java"))
        .unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
}
