//! MindsDB dialect: MySQL plus native queries in `FROM`.
//!
//! `FROM integration (raw query text)` passes the text inside the
//! parentheses through untouched as a [`NativeQuery`].

use super::{Dialect, MySqlDialect, StatementRule, TableFactorRule};
use crate::ast::{Identifier, JoinType, NativeQuery, Node};
use crate::lexer::Keyword;
use crate::parser::{ParseError, Parser};

/// MindsDB dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MindsDbDialect;

impl MindsDbDialect {
    /// Creates a new MindsDB dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MindsDbDialect {
    fn name(&self) -> &'static str {
        "mindsdb"
    }

    fn keywords(&self) -> Vec<Keyword> {
        MySqlDialect.keywords()
    }

    fn statements(&self) -> Vec<StatementRule> {
        MySqlDialect.statements()
    }

    fn table_factors(&self) -> Vec<TableFactorRule> {
        vec![TableFactorRule {
            name: "native_query",
            parse: parse_native_query,
        }]
    }

    fn join_types(&self) -> Vec<JoinType> {
        MySqlDialect.join_types()
    }
}

fn parse_native_query(
    parser: &mut Parser<'_>,
    integration: &Identifier,
) -> Result<Option<Node>, ParseError> {
    let query = parser.capture_parenthesized()?;
    Ok(Some(NativeQuery::new(integration.clone(), query).into()))
}
