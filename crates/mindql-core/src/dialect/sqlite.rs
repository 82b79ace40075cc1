//! SQLite dialect: the base grammar plus `SHOW`.

use super::{show, Dialect, StatementRule};
use crate::lexer::Keyword;

/// The smallest dialect; every other dialect builds on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn keywords(&self) -> Vec<Keyword> {
        show::KEYWORDS.to_vec()
    }

    fn statements(&self) -> Vec<StatementRule> {
        vec![show::STATEMENT]
    }
}
