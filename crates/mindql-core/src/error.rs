//! Top-level error type of [`crate::parse_sql`].

use crate::parser::ParseError;

/// Errors that can occur when parsing a statement by dialect name.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The dialect name is not one of the known dialects.
    #[error("unknown SQL dialect '{0}' (expected one of: sqlite, mysql, mindsdb)")]
    UnknownDialect(String),

    /// The statement failed to lex or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the parse error, if this is one.
    #[must_use]
    pub const fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            Self::UnknownDialect(_) => None,
        }
    }
}
