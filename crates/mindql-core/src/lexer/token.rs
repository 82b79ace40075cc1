//! Token types for the SQL lexer.

use std::fmt;

use super::Span;

/// Every keyword any dialect knows about.
///
/// Which of them actually lex as keywords is decided by the active
/// [`Grammar`](crate::dialect::Grammar); outside of it the same words are
/// plain identifiers. Multi-word variants (`GROUP BY`, `IS NOT`, ...) are
/// single tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Query
    Select,
    Distinct,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
    As,
    On,

    // Ordering
    Asc,
    Desc,
    NullsFirst,
    NullsLast,

    // Joins
    InnerJoin,
    LeftJoin,
    RightJoin,
    FullJoin,
    CrossJoin,

    // Logical and comparison words
    And,
    Or,
    Not,
    Is,
    IsNot,
    In,
    Like,

    // Literals
    Null,
    True,
    False,

    // SHOW
    Show,
    Schemas,
    Databases,
    Tables,
    Table,
    Full,
    Columns,
    Variables,
    Session,
    Global,
    Status,
    Procedure,
    Function,
    Create,
    Warnings,
    Engines,
    Charset,
    Character,
    Set,
    Collation,
    Plugins,

    // MySQL utility statements
    Use,
    Describe,
    Explain,
    Start,
    Transaction,
    Commit,
    Rollback,
}

impl Keyword {
    /// Looks up a single-word keyword (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "DISTINCT" => Some(Self::Distinct),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "HAVING" => Some(Self::Having),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "AS" => Some(Self::As),
            "ON" => Some(Self::On),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IS" => Some(Self::Is),
            "IN" => Some(Self::In),
            "LIKE" => Some(Self::Like),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "SHOW" => Some(Self::Show),
            "SCHEMAS" => Some(Self::Schemas),
            "DATABASES" => Some(Self::Databases),
            "TABLES" => Some(Self::Tables),
            "TABLE" => Some(Self::Table),
            "FULL" => Some(Self::Full),
            "COLUMNS" => Some(Self::Columns),
            "VARIABLES" => Some(Self::Variables),
            "SESSION" => Some(Self::Session),
            "GLOBAL" => Some(Self::Global),
            "STATUS" => Some(Self::Status),
            "PROCEDURE" => Some(Self::Procedure),
            "FUNCTION" => Some(Self::Function),
            "CREATE" => Some(Self::Create),
            "WARNINGS" => Some(Self::Warnings),
            "ENGINES" => Some(Self::Engines),
            "CHARSET" => Some(Self::Charset),
            "CHARACTER" => Some(Self::Character),
            "SET" => Some(Self::Set),
            "COLLATION" => Some(Self::Collation),
            "PLUGINS" => Some(Self::Plugins),
            "USE" => Some(Self::Use),
            "DESCRIBE" => Some(Self::Describe),
            "EXPLAIN" => Some(Self::Explain),
            "START" => Some(Self::Start),
            "TRANSACTION" => Some(Self::Transaction),
            "COMMIT" => Some(Self::Commit),
            "ROLLBACK" => Some(Self::Rollback),
            _ => None,
        }
    }

    /// Looks up a two-word keyword such as `GROUP BY` (case-insensitive).
    #[must_use]
    pub fn compound(first: &str, second: &str) -> Option<Self> {
        let first = first.to_ascii_uppercase();
        let second = second.to_ascii_uppercase();
        match (first.as_str(), second.as_str()) {
            ("GROUP", "BY") => Some(Self::GroupBy),
            ("ORDER", "BY") => Some(Self::OrderBy),
            ("NULLS", "FIRST") => Some(Self::NullsFirst),
            ("NULLS", "LAST") => Some(Self::NullsLast),
            ("INNER", "JOIN") => Some(Self::InnerJoin),
            ("LEFT", "JOIN") => Some(Self::LeftJoin),
            ("RIGHT", "JOIN") => Some(Self::RightJoin),
            ("FULL", "JOIN") => Some(Self::FullJoin),
            ("CROSS", "JOIN") => Some(Self::CrossJoin),
            ("IS", "NOT") => Some(Self::IsNot),
            _ => None,
        }
    }

    /// Returns true if `word` can open a two-word keyword.
    #[must_use]
    pub fn starts_compound(word: &str) -> bool {
        ["GROUP", "ORDER", "NULLS", "INNER", "LEFT", "RIGHT", "FULL", "CROSS", "IS"]
            .iter()
            .any(|w| w.eq_ignore_ascii_case(word))
    }

    /// Canonical upper-case spelling, with a single space in multi-word keywords.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Distinct => "DISTINCT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::GroupBy => "GROUP BY",
            Self::Having => "HAVING",
            Self::OrderBy => "ORDER BY",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::As => "AS",
            Self::On => "ON",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::NullsFirst => "NULLS FIRST",
            Self::NullsLast => "NULLS LAST",
            Self::InnerJoin => "INNER JOIN",
            Self::LeftJoin => "LEFT JOIN",
            Self::RightJoin => "RIGHT JOIN",
            Self::FullJoin => "FULL JOIN",
            Self::CrossJoin => "CROSS JOIN",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Show => "SHOW",
            Self::Schemas => "SCHEMAS",
            Self::Databases => "DATABASES",
            Self::Tables => "TABLES",
            Self::Table => "TABLE",
            Self::Full => "FULL",
            Self::Columns => "COLUMNS",
            Self::Variables => "VARIABLES",
            Self::Session => "SESSION",
            Self::Global => "GLOBAL",
            Self::Status => "STATUS",
            Self::Procedure => "PROCEDURE",
            Self::Function => "FUNCTION",
            Self::Create => "CREATE",
            Self::Warnings => "WARNINGS",
            Self::Engines => "ENGINES",
            Self::Charset => "CHARSET",
            Self::Character => "CHARACTER",
            Self::Set => "SET",
            Self::Collation => "COLLATION",
            Self::Plugins => "PLUGINS",
            Self::Use => "USE",
            Self::Describe => "DESCRIBE",
            Self::Explain => "EXPLAIN",
            Self::Start => "START",
            Self::Transaction => "TRANSACTION",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
        }
    }

    /// Reserved keywords can never be used as bare identifiers.
    ///
    /// The words added by SHOW and the MySQL utility statements are
    /// non-reserved, so `SELECT status FROM t` keeps working when a dialect
    /// enables them.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::Distinct
                | Self::From
                | Self::Where
                | Self::GroupBy
                | Self::Having
                | Self::OrderBy
                | Self::Limit
                | Self::Offset
                | Self::As
                | Self::On
                | Self::Asc
                | Self::Desc
                | Self::NullsFirst
                | Self::NullsLast
                | Self::InnerJoin
                | Self::LeftJoin
                | Self::RightJoin
                | Self::FullJoin
                | Self::CrossJoin
                | Self::And
                | Self::Or
                | Self::Not
                | Self::Is
                | Self::IsNot
                | Self::In
                | Self::Like
                | Self::Null
                | Self::True
                | Self::False
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal (e.g., 42)
    Integer(i64),
    /// Float literal (e.g., 3.14)
    Float(f64),
    /// String literal, quotes stripped
    String(String),

    /// Dotted identifier path, back-quotes stripped from each part
    Identifier(Vec<String>),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// ?
    Question,

    // Special
    /// End of input
    Eof,
    /// Input the lexer could not recognize
    Error(String),
}

impl TokenKind {
    /// Short upper-case name used in syntax error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::String(_) => "STRING",
            Self::Identifier(_) => "ID",
            Self::Keyword(kw) => kw.as_str(),
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "DIVIDE",
            Self::Percent => "MODULO",
            Self::Eq => "EQUALS",
            Self::NotEq => "NEQUALS",
            Self::Lt => "LESS",
            Self::LtEq => "LEQ",
            Self::Gt => "GREATER",
            Self::GtEq => "GEQ",
            Self::Concat => "CONCAT",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Question => "PARAMETER",
            Self::Eof => "EOF",
            Self::Error(_) => "ERROR",
        }
    }
}

/// A token with its span and the exact source text it was lexed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Source text of the token, as written.
    pub text: String,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// End-of-input marker at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::point(offset),
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}
