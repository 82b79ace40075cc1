//! # mindql-core
//!
//! A SQL parser that turns statement text into a round-trippable AST.
//!
//! This crate provides:
//! - A hand-written lexer whose keyword table comes from the active dialect
//! - A recursive descent parser with Pratt expression parsing that checks
//!   SELECT clause order as each clause is attached
//! - AST nodes that render back to canonical SQL and to a structural tree
//! - Dialects (`sqlite`, `mysql`, `mindsdb`) layered on one base grammar
//!
//! ## Parsing
//!
//! ```rust
//! use mindql_core::{parse_sql, Render};
//!
//! let node = parse_sql("select a, b from t where a = 1 order by b desc", "sqlite").unwrap();
//! assert_eq!(node.render_to_text(), "SELECT a, b FROM t WHERE a = 1 ORDER BY b DESC");
//!
//! let err = parse_sql("SELECT a FROM t LIMIT 5 WHERE a = 1", "sqlite").unwrap_err();
//! assert_eq!(err.as_parse_error().unwrap().message, "WHERE must go after LIMIT");
//! ```
//!
//! ## Native queries
//!
//! The `mindsdb` dialect passes the text of `integration (...)` through
//! without parsing it:
//!
//! ```rust
//! use mindql_core::ast::Node;
//! use mindql_core::parse_sql;
//!
//! let node = parse_sql("SELECT * FROM pg (select * from orders) AS o", "mindsdb").unwrap();
//! let from = node.as_select().and_then(|s| s.from_table.as_ref());
//! assert!(matches!(from, Some(Node::NativeQuery(q)) if q.query == "select * from orders"));
//! ```

pub mod ast;
pub mod dialect;
mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Node, Render};
pub use dialect::{Dialect, DialectKind, Grammar};
pub use error::Error;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};

/// Parses one statement under the dialect called `dialect`.
///
/// # Errors
///
/// Returns [`Error::UnknownDialect`] for an unknown dialect name, and
/// [`Error::Parse`] for the first lexical, syntax or semantic error in
/// `sql`.
pub fn parse_sql(sql: &str, dialect: &str) -> Result<Node, Error> {
    let kind: DialectKind = dialect.parse()?;
    let grammar = kind.grammar();

    let span = tracing::debug_span!(
        "parse_sql",
        dialect = kind.as_str(),
        statement = tracing::field::Empty
    );
    let _enter = span.enter();

    match Parser::new(sql, &grammar).parse_statement() {
        Ok(node) => {
            span.record("statement", node.kind_name());
            Ok(node)
        }
        Err(err) => {
            tracing::debug!(error = %err, "failed to parse statement");
            Err(err.into())
        }
    }
}
