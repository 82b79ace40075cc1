//! SQL Dialect support.
//!
//! A dialect extends the base SELECT grammar with extra keywords, statement
//! productions, table factors and join types. The parser never looks at a
//! concrete dialect: [`Grammar::new`] merges the base tables with a
//! dialect's extensions once, and the lexer and parser only consult the
//! merged [`Grammar`].

mod grammar;
mod mindsdb;
mod mysql;
mod show;
mod sqlite;

use std::fmt;
use std::str::FromStr;

pub use grammar::Grammar;
pub use mindsdb::MindsDbDialect;
pub use mysql::MySqlDialect;
pub use sqlite::SqliteDialect;

use crate::ast::{Identifier, JoinType, Node};
use crate::error::Error;
use crate::lexer::Keyword;
use crate::parser::{ParseError, Parser};

/// Parses a whole statement whose first token is [`StatementRule::keyword`].
///
/// The parser is positioned on that keyword when the rule is called.
pub type StatementParser = fn(&mut Parser<'_>) -> Result<Node, ParseError>;

/// Parses a table factor written as `name (...)`.
///
/// Called with the parser on the `(`. Returning `Ok(None)` declines the
/// input, in which case the rule must not have consumed anything.
pub type TableFactorParser = fn(&mut Parser<'_>, &Identifier) -> Result<Option<Node>, ParseError>;

/// A statement production keyed by its leading keyword.
#[derive(Clone, Copy)]
pub struct StatementRule {
    pub keyword: Keyword,
    pub parse: StatementParser,
}

impl fmt::Debug for StatementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementRule")
            .field("keyword", &self.keyword)
            .finish_non_exhaustive()
    }
}

/// A `FROM` production tried when a table name is followed by `(`.
#[derive(Clone, Copy)]
pub struct TableFactorRule {
    pub name: &'static str,
    pub parse: TableFactorParser,
}

impl fmt::Debug for TableFactorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableFactorRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Trait for SQL dialect-specific grammar extensions.
///
/// Every method except [`Dialect::name`] defaults to "no extension", so a
/// dialect that returns nothing parses exactly the base grammar.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Extra keywords lexed as keywords under this dialect.
    fn keywords(&self) -> Vec<Keyword> {
        Vec::new()
    }

    /// Extra statement productions.
    fn statements(&self) -> Vec<StatementRule> {
        Vec::new()
    }

    /// Extra table factors.
    fn table_factors(&self) -> Vec<TableFactorRule> {
        Vec::new()
    }

    /// Join types beyond INNER, LEFT, RIGHT and FULL.
    fn join_types(&self) -> Vec<JoinType> {
        Vec::new()
    }
}

/// The closed set of dialects [`crate::parse_sql`] accepts by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectKind {
    /// Base grammar plus SHOW.
    Sqlite,
    /// SQLite plus CROSS JOIN and the MySQL utility statements.
    Mysql,
    /// MySQL plus native queries.
    MindsDb,
}

impl DialectKind {
    /// All dialects, in order.
    pub const ALL: [Self; 3] = [Self::Sqlite, Self::Mysql, Self::MindsDb];

    /// The name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Mysql => "mysql",
            Self::MindsDb => "mindsdb",
        }
    }

    /// The dialect implementation.
    #[must_use]
    pub const fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Sqlite => &SqliteDialect,
            Self::Mysql => &MySqlDialect,
            Self::MindsDb => &MindsDbDialect,
        }
    }

    /// Builds the merged grammar for this dialect.
    #[must_use]
    pub fn grammar(self) -> Grammar {
        Grammar::new(self.dialect())
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownDialect(s.to_owned()))
    }
}
