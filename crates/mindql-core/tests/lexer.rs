//! Tests for the tokenizer as seen through the public API.

use mindql_core::lexer::{Keyword, Span};
use mindql_core::{DialectKind, Lexer, TokenKind};

fn kinds(dialect: DialectKind, sql: &str) -> Vec<TokenKind> {
    let grammar = dialect.grammar();
    Lexer::new(sql, &grammar)
        .tokenize()
        .unwrap_or_else(|e| panic!("Failed to lex: {sql}\nError: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn ident(parts: &[&str]) -> TokenKind {
    TokenKind::Identifier(parts.iter().map(|p| (*p).to_owned()).collect())
}

#[test]
fn float_is_one_token() {
    assert_eq!(
        kinds(DialectKind::Sqlite, "1.5"),
        vec![TokenKind::Float(1.5), TokenKind::Eof]
    );
}

#[test]
fn quoted_segment_keeps_spaces() {
    assert_eq!(
        kinds(DialectKind::Sqlite, "a.`b c`"),
        vec![ident(&["a", "b c"]), TokenKind::Eof]
    );
}

#[test]
fn keywords_are_case_insensitive_but_text_is_kept() {
    let grammar = DialectKind::Sqlite.grammar();
    let tokens = Lexer::new("SeLeCt MyCol", &grammar).tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Select));
    assert_eq!(tokens[0].text, "SeLeCt");
    assert_eq!(tokens[1].kind, ident(&["MyCol"]));
}

#[test]
fn two_word_keywords_need_exactly_one_space() {
    assert_eq!(
        kinds(DialectKind::Sqlite, "ORDER BY"),
        vec![TokenKind::Keyword(Keyword::OrderBy), TokenKind::Eof]
    );
    assert_eq!(
        kinds(DialectKind::Sqlite, "ORDER  BY"),
        vec![ident(&["ORDER"]), ident(&["BY"]), TokenKind::Eof]
    );
    assert_eq!(
        kinds(DialectKind::Sqlite, "nulls last"),
        vec![TokenKind::Keyword(Keyword::NullsLast), TokenKind::Eof]
    );
}

#[test]
fn whitespace_is_discarded() {
    assert_eq!(
        kinds(DialectKind::Sqlite, "\tSELECT\r\n1 "),
        vec![
            TokenKind::Keyword(Keyword::Select),
            TokenKind::Integer(1),
            TokenKind::Eof
        ]
    );
}

#[test]
fn dialect_keywords() {
    assert_eq!(
        kinds(DialectKind::Sqlite, "commit"),
        vec![ident(&["commit"]), TokenKind::Eof]
    );
    assert_eq!(
        kinds(DialectKind::Mysql, "commit"),
        vec![TokenKind::Keyword(Keyword::Commit), TokenKind::Eof]
    );
}

#[test]
fn lex_error_carries_offset() {
    let grammar = DialectKind::Sqlite.grammar();
    let err = Lexer::new("SELECT 'open", &grammar).tokenize().unwrap_err();
    assert!(err.is_lex());
    assert_eq!(err.span, Span::new(7, 12));

    let err = Lexer::new("a # b", &grammar).tokenize().unwrap_err();
    assert_eq!(err.span.start, 2);
    assert_eq!(err.message, "Unexpected character: #: \"#\"");
}
