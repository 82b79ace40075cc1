//! Tests for SELECT targets and clauses.

mod common;
use common::*;

use mindql_core::ast::{
    BinaryOp, BinaryOperation, Constant, Identifier, Literal, Node, NullOrdering, OrderBy,
    OrderDirection, Select,
};
use mindql_core::parser::SemanticErrorKind;
use mindql_core::Render;

#[test]
fn select_star() {
    let s = parse_select("SELECT * FROM users");
    assert_eq!(s.targets, vec![Identifier::star().into()]);
    assert_eq!(s.from_table, Some(Identifier::from_path("users").into()));
}

#[test]
fn select_without_from() {
    let s = parse_select("SELECT 1");
    assert_eq!(s.targets, vec![Constant::integer(1).into()]);
    assert!(s.from_table.is_none());
}

#[test]
fn select_distinct() {
    assert!(parse_select("SELECT DISTINCT a FROM t").distinct);
    assert!(!parse_select("SELECT a FROM t").distinct);
}

#[test]
fn target_aliases() {
    let s = parse_select("SELECT a AS x, count(*) AS n, 1 + 2 AS `the sum` FROM t");
    let aliases: Vec<_> = s
        .targets
        .iter()
        .map(|t| match t {
            Node::Identifier(n) => n.alias.clone(),
            Node::Function(n) => n.alias.clone(),
            Node::BinaryOperation(n) => n.alias.clone(),
            other => panic!("unexpected target {other:?}"),
        })
        .collect();
    assert_eq!(
        aliases,
        vec![
            Some("x".to_owned()),
            Some("n".to_owned()),
            Some("the sum".to_owned())
        ]
    );
}

#[test]
fn non_reserved_keywords_as_names() {
    let s = parse_select("SELECT status, tables FROM table AS full");
    assert_eq!(
        s.targets,
        vec![
            Identifier::from_path("status").into(),
            Identifier::from_path("tables").into()
        ]
    );
    assert_eq!(
        s.from_table,
        Some(Identifier::from_path("table").with_alias("full").into())
    );
}

#[test]
fn where_clause() {
    let s = parse_select("SELECT * FROM users WHERE id = 1");
    assert_eq!(
        s.where_clause,
        Some(
            BinaryOperation::new(BinaryOp::Eq, Identifier::from_path("id"), Constant::integer(1))
                .into()
        )
    );
}

#[test]
fn where_accepts_function_and_not() {
    assert!(parse_select("SELECT * FROM t WHERE is_active(x)").where_clause.is_some());
    assert!(parse_select("SELECT * FROM t WHERE NOT x").where_clause.is_some());
    assert!(parse_select("SELECT * FROM t WHERE (a = 1)").where_clause.is_some());
}

#[test]
fn where_rejects_bare_operands() {
    let err = parse_err("SELECT c FROM t WHERE c");
    assert_eq!(err.semantic_kind(), Some(SemanticErrorKind::NonBooleanCondition));
    assert!(err
        .message
        .contains("must contain an operation that evaluates to a boolean"));

    let err = parse_err("SELECT c FROM t WHERE 1");
    assert_eq!(
        err.message,
        "WHERE must contain an operation that evaluates to a boolean, got: 1"
    );
}

#[test]
fn group_by_and_having() {
    let s = parse_select("SELECT a, count(*) FROM t GROUP BY a, t.b HAVING count(*) > 1");
    assert_eq!(
        s.group_by,
        Some(vec![Identifier::from_path("a"), Identifier::from_path("t.b")])
    );
    assert!(matches!(
        s.having,
        Some(Node::BinaryOperation(BinaryOperation {
            op: BinaryOp::Gt,
            ..
        }))
    ));
}

#[test]
fn group_by_rejects_expressions() {
    let err = parse_err("SELECT a FROM t GROUP BY a, 1");
    assert_eq!(err.semantic_kind(), Some(SemanticErrorKind::NonIdentifierGroupBy));
    assert_eq!(err.message, "GROUP BY must contain only identifiers, got: 1");

    let err = parse_err("SELECT a FROM t GROUP BY a + b");
    assert_eq!(err.message, "GROUP BY must contain only identifiers, got: a + b");
}

#[test]
fn having_rejects_bare_operands() {
    let err = parse_err("SELECT a FROM t GROUP BY a HAVING a");
    assert_eq!(
        err.message,
        "HAVING must contain an operation that evaluates to a boolean, got: a"
    );
}

#[test]
fn order_by_terms() {
    let s = parse_select("SELECT a FROM t ORDER BY a, b DESC, c ASC NULLS FIRST, d NULLS LAST");
    assert_eq!(
        s.order_by,
        Some(vec![
            OrderBy::new(Identifier::from_path("a")),
            OrderBy::new(Identifier::from_path("b")).desc(),
            OrderBy::new(Identifier::from_path("c"))
                .asc()
                .nulls(NullOrdering::First),
            OrderBy::new(Identifier::from_path("d")).nulls(NullOrdering::Last),
        ])
    );
    let order = s.order_by.unwrap();
    assert_eq!(order[1].direction, Some(OrderDirection::Desc));
    assert_eq!(order[0].direction, None);
}

#[test]
fn limit_and_offset() {
    let s = parse_select("SELECT c FROM t LIMIT 5 OFFSET 1");
    assert_eq!(s.limit, Some(5));
    assert_eq!(s.offset, Some(1));
    assert_eq!(parse_select("SELECT 1 LIMIT 0").limit, Some(0));
}

#[test]
fn limit_and_offset_must_be_integers() {
    let err = parse_err(r#"SELECT c FROM t LIMIT "x""#);
    assert_eq!(err.semantic_kind(), Some(SemanticErrorKind::NonIntegerLimit));
    assert_eq!(err.message, "LIMIT must be an integer value, got: 'x'");

    let err = parse_err("SELECT c FROM t OFFSET 3.0");
    assert_eq!(err.semantic_kind(), Some(SemanticErrorKind::NonIntegerLimit));
    assert_eq!(err.message, "OFFSET must be an integer value, got: 3.0");

    assert!(parse_err("SELECT c FROM t LIMIT a").is_syntax());
}

#[test]
fn builder_matches_parser() {
    let built = Select::new(vec![Identifier::from_path("a").into()])
        .with_from(Identifier::from_path("t"))
        .with_where(BinaryOperation::new(
            BinaryOp::Like,
            Identifier::from_path("a"),
            Constant::string("x%"),
        ))
        .with_limit(3);
    let parsed = parse("SELECT a FROM t WHERE a LIKE 'x%' LIMIT 3");
    assert!(Node::from(built).structural_equals(&parsed));
}

#[test]
fn constants() {
    let s = parse_select("SELECT 1, 2.5, 'a', \"b\", NULL, TRUE, false");
    let values: Vec<_> = s
        .targets
        .iter()
        .map(|t| match t {
            Node::Constant(c) => c.value.clone(),
            other => panic!("unexpected target {other:?}"),
        })
        .collect();
    assert_eq!(
        values,
        vec![
            Literal::Integer(1),
            Literal::Float(2.5),
            Literal::String("a".into()),
            Literal::String("b".into()),
            Literal::Null,
            Literal::Boolean(true),
            Literal::Boolean(false),
        ]
    );
}
