//! MySQL dialect.
//!
//! Adds `CROSS JOIN` and the utility statements `USE`, `DESCRIBE`,
//! `EXPLAIN`, `START TRANSACTION`, `COMMIT` and `ROLLBACK` on top of
//! [`SqliteDialect`](super::SqliteDialect).

use super::{Dialect, SqliteDialect, StatementRule};
use crate::ast::{Describe, Explain, JoinType, Node, Transaction, TransactionCommand, Use};
use crate::lexer::Keyword;
use crate::parser::{ParseError, Parser};

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn keywords(&self) -> Vec<Keyword> {
        let mut keywords = SqliteDialect.keywords();
        // Statement keywords are added by the grammar; TRANSACTION only
        // ever follows START.
        keywords.push(Keyword::Transaction);
        keywords
    }

    fn statements(&self) -> Vec<StatementRule> {
        let mut statements = SqliteDialect.statements();
        statements.extend([
            StatementRule {
                keyword: Keyword::Use,
                parse: parse_use,
            },
            StatementRule {
                keyword: Keyword::Describe,
                parse: parse_describe,
            },
            StatementRule {
                keyword: Keyword::Explain,
                parse: parse_explain,
            },
            StatementRule {
                keyword: Keyword::Start,
                parse: parse_start_transaction,
            },
            StatementRule {
                keyword: Keyword::Commit,
                parse: parse_commit,
            },
            StatementRule {
                keyword: Keyword::Rollback,
                parse: parse_rollback,
            },
        ]);
        statements
    }

    fn join_types(&self) -> Vec<JoinType> {
        vec![JoinType::Cross]
    }
}

fn parse_use(parser: &mut Parser<'_>) -> Result<Node, ParseError> {
    parser.expect_keyword(Keyword::Use)?;
    let database = parser.parse_identifier()?;
    Ok(Use { database }.into())
}

fn parse_describe(parser: &mut Parser<'_>) -> Result<Node, ParseError> {
    parser.expect_keyword(Keyword::Describe)?;
    let target = parser.parse_identifier()?;
    Ok(Describe { target }.into())
}

fn parse_explain(parser: &mut Parser<'_>) -> Result<Node, ParseError> {
    parser.expect_keyword(Keyword::Explain)?;
    let target = parser.parse_identifier()?;
    Ok(Explain { target }.into())
}

fn parse_start_transaction(parser: &mut Parser<'_>) -> Result<Node, ParseError> {
    parser.expect_keyword(Keyword::Start)?;
    parser.expect_keyword(Keyword::Transaction)?;
    Ok(transaction(TransactionCommand::Start))
}

fn parse_commit(parser: &mut Parser<'_>) -> Result<Node, ParseError> {
    parser.expect_keyword(Keyword::Commit)?;
    Ok(transaction(TransactionCommand::Commit))
}

fn parse_rollback(parser: &mut Parser<'_>) -> Result<Node, ParseError> {
    parser.expect_keyword(Keyword::Rollback)?;
    Ok(transaction(TransactionCommand::Rollback))
}

fn transaction(command: TransactionCommand) -> Node {
    Transaction { command }.into()
}
