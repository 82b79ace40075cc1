#![allow(dead_code)]

use mindql_core::ast::Select;
use mindql_core::{DialectKind, Node, ParseError, Parser, Render};

pub fn parse_in(dialect: DialectKind, sql: &str) -> Result<Node, ParseError> {
    let grammar = dialect.grammar();
    Parser::new(sql, &grammar).parse_statement()
}

/// Parses under the richest dialect.
pub fn parse(sql: &str) -> Node {
    parse_in(DialectKind::MindsDb, sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_in(DialectKind::MindsDb, sql)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> Select {
    match parse(sql) {
        Node::Select(s) => *s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

/// Verifies that rendering is a fixed point and that re-parsing the
/// rendered text yields a structurally equal tree.
pub fn round_trip_in(dialect: DialectKind, sql: &str) {
    let ast1 = parse_in(dialect, sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"));
    let rendered1 = ast1.render_to_text();
    let ast2 = parse_in(dialect, &rendered1)
        .unwrap_or_else(|e| panic!("Failed to re-parse: {rendered1}\nError: {e}"));
    let rendered2 = ast2.render_to_text();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    assert!(
        ast1.structural_equals(&ast2),
        "Trees differ for {sql}\n{}\n{}",
        ast1.render_to_tree(),
        ast2.render_to_tree()
    );
}

pub fn round_trip(sql: &str) {
    round_trip_in(DialectKind::MindsDb, sql);
}
