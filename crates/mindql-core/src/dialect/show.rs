//! The `SHOW` statement, shared by every dialect.

use super::StatementRule;
use crate::ast::{Node, Show};
use crate::lexer::{Keyword, TokenKind};
use crate::parser::{ParseError, Parser, SemanticErrorKind};

/// Words `SHOW` adds to the keyword table. All of them are non-reserved.
pub const KEYWORDS: &[Keyword] = &[
    Keyword::Show,
    Keyword::Schemas,
    Keyword::Databases,
    Keyword::Tables,
    Keyword::Table,
    Keyword::Full,
    Keyword::Columns,
    Keyword::Variables,
    Keyword::Session,
    Keyword::Global,
    Keyword::Status,
    Keyword::Procedure,
    Keyword::Function,
    Keyword::Create,
    Keyword::Warnings,
    Keyword::Engines,
    Keyword::Charset,
    Keyword::Character,
    Keyword::Set,
    Keyword::Collation,
    Keyword::Plugins,
];

pub const STATEMENT: StatementRule = StatementRule {
    keyword: Keyword::Show,
    parse: parse_show,
};

/// Two-word categories, tried before the single words.
const PAIRS: &[(Keyword, Keyword)] = &[
    (Keyword::Full, Keyword::Tables),
    (Keyword::Full, Keyword::Columns),
    (Keyword::Session, Keyword::Variables),
    (Keyword::Global, Keyword::Variables),
    (Keyword::Session, Keyword::Status),
    (Keyword::Global, Keyword::Status),
    (Keyword::Procedure, Keyword::Status),
    (Keyword::Function, Keyword::Status),
    (Keyword::Create, Keyword::Table),
    (Keyword::Character, Keyword::Set),
    (Keyword::Table, Keyword::Status),
];

const SINGLES: &[Keyword] = &[
    Keyword::Schemas,
    Keyword::Databases,
    Keyword::Tables,
    Keyword::Variables,
    Keyword::Warnings,
    Keyword::Engines,
    Keyword::Charset,
    Keyword::Collation,
    Keyword::Status,
    Keyword::Plugins,
];

/// `SHOW category [FROM name]... [LIKE 'pattern' | WHERE condition]`
///
/// Each further `FROM` qualifies the name read so far, so
/// `FROM a FROM b` yields `b.a`.
fn parse_show(parser: &mut Parser<'_>) -> Result<Node, ParseError> {
    parser.expect_keyword(Keyword::Show)?;
    let mut show = Show::new(&parse_category(parser)?);

    let mut tables = Vec::new();
    while parser.eat_keyword(Keyword::From) {
        tables.push(parser.parse_identifier()?);
    }
    if let Some(table) = tables
        .into_iter()
        .reduce(|inner, outer| inner.qualified_by(outer))
    {
        show = show.with_from(table);
    }

    if parser.eat_keyword(Keyword::Like) {
        show = show.with_like(parse_pattern(parser)?);
    } else if parser.eat_keyword(Keyword::Where) {
        show = show.with_where(parser.parse_condition("WHERE")?);
    }

    Ok(show.into())
}

fn parse_category(parser: &mut Parser<'_>) -> Result<String, ParseError> {
    let first = parser.current().clone();
    if matches!(first.kind, TokenKind::Eof | TokenKind::Error(_)) {
        return Err(parser.unexpected("SHOW category"));
    }

    if let Some(word) = first.as_keyword() {
        parser.advance();
        if let Some(next) = parser.current().as_keyword() {
            if PAIRS.contains(&(word, next)) {
                parser.advance();
                return Ok(format!("{word} {next}"));
            }
        }
        if SINGLES.contains(&word) {
            return Ok(word.as_str().to_owned());
        }
    }

    Err(ParseError::semantic(
        SemanticErrorKind::UnknownShowCategory,
        format!("Unknown SHOW category: {}", first.text),
        first.span,
    ))
}

fn parse_pattern(parser: &mut Parser<'_>) -> Result<String, ParseError> {
    let TokenKind::String(pattern) = &parser.current().kind else {
        return Err(parser.unexpected("string"));
    };
    let pattern = pattern.clone();
    parser.advance();
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use crate::ast::{Identifier, Node, Show};
    use crate::dialect::DialectKind;
    use crate::parser::{ParseError, Parser, SemanticErrorKind};

    fn parse(sql: &str) -> Result<Node, ParseError> {
        let grammar = DialectKind::Sqlite.grammar();
        Parser::new(sql, &grammar).parse_statement()
    }

    fn show(sql: &str) -> Show {
        match parse(sql).unwrap() {
            Node::Show(show) => show,
            other => panic!("expected SHOW, got {other:?}"),
        }
    }

    #[test]
    fn test_single_and_pair_categories() {
        assert_eq!(show("SHOW TABLES").category, "TABLES");
        assert_eq!(show("show full tables").category, "FULL TABLES");
        assert_eq!(show("SHOW table status").category, "TABLE STATUS");
        assert_eq!(show("SHOW STATUS").category, "STATUS");
        assert_eq!(show("SHOW character set").category, "CHARACTER SET");
        assert_eq!(show("SHOW global variables").category, "GLOBAL VARIABLES");
    }

    #[test]
    fn test_unknown_category() {
        for sql in ["SHOW abracadabra", "SHOW FULL", "SHOW TABLE"] {
            let err = parse(sql).unwrap_err();
            assert_eq!(
                err.semantic_kind(),
                Some(SemanticErrorKind::UnknownShowCategory),
                "{sql}"
            );
        }
        assert!(parse("SHOW").unwrap_err().is_syntax());
    }

    #[test]
    fn test_repeated_from_qualifies() {
        let node = show("SHOW FULL COLUMNS FROM a FROM b");
        assert_eq!(node.from_table, Some(Identifier::from_path("b.a")));
    }

    #[test]
    fn test_like_and_where() {
        let node = show("SHOW TABLES FROM db LIKE 'user%'");
        assert_eq!(node.like.as_deref(), Some("user%"));
        assert_eq!(node.from_table, Some(Identifier::from_path("db")));

        let node = show("SHOW VARIABLES WHERE name = 'x'");
        assert!(node.where_clause.is_some());

        let err = parse("SHOW VARIABLES WHERE name").unwrap_err();
        assert_eq!(err.semantic_kind(), Some(SemanticErrorKind::NonBooleanCondition));
        assert!(parse("SHOW TABLES LIKE x").unwrap_err().is_syntax());
    }
}
