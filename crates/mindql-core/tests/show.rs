//! Tests for SHOW and the MySQL utility statements.

mod common;
use common::*;

use mindql_core::ast::{
    BinaryOp, BinaryOperation, Constant, Describe, Identifier, Node, Show, Transaction,
    TransactionCommand, Use,
};
use mindql_core::parser::SemanticErrorKind;
use mindql_core::{DialectKind, Render};

#[test]
fn show_tables_round_trips() {
    let node = parse("SHOW TABLES");
    assert_eq!(node.render_to_text(), "SHOW TABLES");
    assert!(node.structural_equals(&Show::new("TABLES").into()));
    assert_eq!(parse("show tables").render_to_text(), "SHOW TABLES");
}

#[test]
fn show_is_in_every_dialect() {
    for dialect in DialectKind::ALL {
        assert!(parse_in(dialect, "SHOW DATABASES").is_ok(), "{dialect}");
    }
}

#[test]
fn all_categories() {
    for category in [
        "SCHEMAS",
        "DATABASES",
        "TABLES",
        "FULL TABLES",
        "VARIABLES",
        "SESSION VARIABLES",
        "GLOBAL VARIABLES",
        "SESSION STATUS",
        "GLOBAL STATUS",
        "PROCEDURE STATUS",
        "FUNCTION STATUS",
        "CREATE TABLE",
        "WARNINGS",
        "ENGINES",
        "CHARSET",
        "CHARACTER SET",
        "COLLATION",
        "TABLE STATUS",
        "STATUS",
        "PLUGINS",
        "FULL COLUMNS",
    ] {
        let node = parse(&format!("SHOW {}", category.to_lowercase()));
        assert_eq!(node, Show::new(category).into(), "{category}");
    }
}

#[test]
fn unknown_category() {
    let err = parse_err("SHOW abracadabra");
    assert_eq!(err.semantic_kind(), Some(SemanticErrorKind::UnknownShowCategory));
    assert_eq!(err.message, "Unknown SHOW category: abracadabra");
}

#[test]
fn show_from_where_like() {
    assert_eq!(
        parse("SHOW FULL TABLES FROM mindsdb WHERE name = 'x'"),
        Show::new("FULL TABLES")
            .with_from(Identifier::from_path("mindsdb"))
            .with_where(BinaryOperation::new(
                BinaryOp::Eq,
                Identifier::from_path("name"),
                Constant::string("x")
            ))
            .into()
    );
    assert_eq!(
        parse("SHOW TABLES LIKE 'x%'").render_to_text(),
        "SHOW TABLES LIKE 'x%'"
    );
}

#[test]
fn double_from_concatenates() {
    let node = parse("SHOW FULL COLUMNS FROM a FROM b");
    assert_eq!(
        node,
        Show::new("FULL COLUMNS")
            .with_from(Identifier::from_path("b.a"))
            .into()
    );
    assert_eq!(node.render_to_text(), "SHOW FULL COLUMNS FROM b.a");
}

#[test]
fn show_where_needs_an_operation() {
    let err = parse_err("SHOW TABLES WHERE name");
    assert_eq!(err.semantic_kind(), Some(SemanticErrorKind::NonBooleanCondition));
}

#[test]
fn mysql_statements() {
    assert_eq!(
        parse_in(DialectKind::Mysql, "USE db").unwrap(),
        Use {
            database: Identifier::from_path("db")
        }
        .into()
    );
    assert_eq!(
        parse_in(DialectKind::MindsDb, "DESCRIBE mindsdb.model").unwrap(),
        Describe {
            target: Identifier::from_path("mindsdb.model")
        }
        .into()
    );
    assert_eq!(
        parse_in(DialectKind::Mysql, "START TRANSACTION").unwrap(),
        Transaction {
            command: TransactionCommand::Start
        }
        .into()
    );
    assert_eq!(
        parse_in(DialectKind::Mysql, "COMMIT").unwrap().render_to_text(),
        "COMMIT"
    );
}

#[test]
fn mysql_statements_not_in_sqlite() {
    for sql in ["USE db", "DESCRIBE t", "EXPLAIN t", "COMMIT", "ROLLBACK"] {
        let err = parse_in(DialectKind::Sqlite, sql).unwrap_err();
        assert!(err.is_syntax(), "{sql}");
    }
}

#[test]
fn statement_words_stay_usable_as_names() {
    let node = parse_in(DialectKind::Mysql, "SELECT use, commit FROM explain").unwrap();
    let Node::Select(select) = node else {
        panic!("expected SELECT");
    };
    assert_eq!(select.targets.len(), 2);
    assert_eq!(select.from_table, Some(Identifier::from_path("explain").into()));
}
