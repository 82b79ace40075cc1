//! Parser error types.

use std::fmt;

use crate::lexer::{Span, Token, TokenKind};

/// Which semantic rule a statement broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticErrorKind {
    /// A SELECT clause appeared twice.
    DuplicateClause,
    /// A clause appeared without the clause it depends on.
    MissingPrerequisite,
    /// A clause appeared after one that must follow it.
    ClauseOutOfOrder,
    /// WHERE or HAVING is not an operation.
    NonBooleanCondition,
    /// GROUP BY contains something other than identifiers.
    NonIdentifierGroupBy,
    /// LIMIT or OFFSET is not an integer constant.
    NonIntegerLimit,
    /// SHOW was followed by an unknown category.
    UnknownShowCategory,
}

/// Classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input the lexer could not turn into a token.
    Lex,
    /// A token that no production accepts at this point.
    Syntax,
    /// Well-formed input that breaks a statement rule.
    Semantic(SemanticErrorKind),
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} at position {span}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a lexical error for an unrecognized token.
    #[must_use]
    pub fn lex(message: impl fmt::Display, token: &Token) -> Self {
        Self {
            kind: ErrorKind::Lex,
            message: format!("{message}: \"{}\"", token.text),
            span: token.span,
            expected: None,
            found: Some(token.kind.clone()),
        }
    }

    /// Creates a syntax error for a token no production accepts.
    ///
    /// Error tokens are reported as lexical errors and EOF as
    /// [`ParseError::unexpected_eof`].
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, token: &Token) -> Self {
        match &token.kind {
            TokenKind::Error(message) => Self::lex(message, token),
            TokenKind::Eof => Self::unexpected_eof(expected, token.span),
            kind => {
                let expected: String = expected.into();
                Self {
                    kind: ErrorKind::Syntax,
                    message: format!(
                        "Syntax error at token {}: \"{}\" (expected {expected})",
                        kind.name(),
                        token.text
                    ),
                    span: token.span,
                    expected: Some(expected),
                    found: Some(kind.clone()),
                }
            }
        }
    }

    /// Creates a syntax error for input that ended too early.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            kind: ErrorKind::Syntax,
            message: format!("Syntax error at end of input (expected {expected})"),
            span,
            expected: Some(expected),
            found: Some(TokenKind::Eof),
        }
    }

    /// Creates a syntax error for an expression nested past `limit` levels.
    #[must_use]
    pub fn nesting_too_deep(limit: usize, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: format!("Syntax error: expression nested deeper than {limit} levels"),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates a semantic error.
    #[must_use]
    pub fn semantic(kind: SemanticErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Semantic(kind),
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Returns true for lexical errors.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self.kind, ErrorKind::Lex)
    }

    /// Returns true for syntax errors.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax)
    }

    /// Returns the semantic rule that was broken, if any.
    #[must_use]
    pub const fn semantic_kind(&self) -> Option<SemanticErrorKind> {
        match self.kind {
            ErrorKind::Semantic(kind) => Some(kind),
            _ => None,
        }
    }
}
