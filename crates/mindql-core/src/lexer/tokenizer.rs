//! SQL tokenizer.

use super::{Keyword, Span, Token, TokenKind};
use crate::dialect::Grammar;
use crate::parser::ParseError;

/// Characters allowed in a bare identifier segment.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// A lexer that tokenizes SQL input against a dialect's keyword table.
///
/// Tokens are produced lazily through [`Lexer::next_token`]; the parser pulls
/// them one at a time so a dialect production can take over the raw input
/// (see [`Lexer::scan_raw_group`]).
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// Keyword table of the active dialect.
    grammar: &'a Grammar,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str, grammar: &'a Grammar) -> Self {
        Self {
            input,
            grammar,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character at byte offset `at` without advancing.
    fn char_at(&self, at: usize) -> Option<char> {
        self.input.get(at..).and_then(|rest| rest.chars().next())
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips the ignored characters: space, tab, newline and carriage return.
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    /// Length in bytes of the run of word characters starting at `at`.
    fn word_len(&self, at: usize) -> usize {
        self.input
            .get(at..)
            .map_or(0, |rest| rest.chars().take_while(|c| is_word_char(*c)).count())
    }

    /// Returns true if a bare or back-quoted segment starts at `at`.
    fn segment_starts_at(&self, at: usize) -> bool {
        if self.char_at(at) == Some('`') {
            return true;
        }
        let len = self.word_len(at);
        len > 0 && !self.input[at..at + len].bytes().all(|b| b.is_ascii_digit())
    }

    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token covering `start..pos`.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.input[self.start..self.pos], self.make_span())
    }

    fn error_token(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    /// Scans a dotted identifier path, or a keyword when the whole match is a
    /// single bare word the active grammar knows.
    fn scan_identifier(&mut self) -> Token {
        let mut parts = Vec::new();
        let mut quoted = false;

        loop {
            if self.peek() == Some('`') {
                self.advance();
                let content_start = self.pos;
                while self.peek().is_some_and(|c| c != '`') {
                    self.advance();
                }
                if self.peek().is_none() {
                    return self.error_token("Unterminated quoted identifier");
                }
                let content = &self.input[content_start..self.pos];
                self.advance();
                if content.is_empty() {
                    return self.error_token("Empty quoted identifier");
                }
                parts.push(content.to_owned());
                quoted = true;
            } else {
                let len = self.word_len(self.pos);
                parts.push(self.input[self.pos..self.pos + len].to_owned());
                self.pos += len;
            }

            if self.peek() == Some('.') && self.segment_starts_at(self.pos + 1) {
                self.advance();
            } else {
                break;
            }
        }

        if parts.len() == 1 && !quoted {
            if let Some(keyword) = self.scan_compound_keyword(&parts[0]) {
                return self.make_token(TokenKind::Keyword(keyword));
            }
            if let Some(keyword) = self.grammar.keyword(&parts[0]) {
                return self.make_token(TokenKind::Keyword(keyword));
            }
        }
        self.make_token(TokenKind::Identifier(parts))
    }

    /// Tries to extend `first` with ` <word>` into a two-word keyword.
    ///
    /// Consumes the second word only on success.
    fn scan_compound_keyword(&mut self, first: &str) -> Option<Keyword> {
        if !Keyword::starts_compound(first) || self.peek() != Some(' ') {
            return None;
        }
        let second_start = self.pos + 1;
        let len = self.word_len(second_start);
        if len == 0 {
            return None;
        }
        let second = &self.input[second_start..second_start + len];
        let keyword = self.grammar.compound_keyword(first, second)?;
        self.pos = second_start + len;
        Some(keyword)
    }

    /// Scans an integer or `digits.digits` float.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let is_float = self.peek() == Some('.')
            && self.char_at(self.pos + 1).is_some_and(|c| c.is_ascii_digit());
        if is_float {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(f) if f.is_finite() => self.make_token(TokenKind::Float(f)),
                Ok(_) => self.error_token("Invalid float: out of range"),
                Err(e) => self.error_token(format!("Invalid float: {e}")),
            }
        } else {
            match text.parse::<i64>() {
                Ok(i) => self.make_token(TokenKind::Integer(i)),
                Err(e) => self.error_token(format!("Invalid integer: {e}")),
            }
        }
    }

    /// Scans a string literal. There are no escapes; the value runs to the
    /// next matching quote.
    fn scan_string(&mut self, quote: char) -> Token {
        let content_start = self.pos;
        while self.peek().is_some_and(|c| c != quote) {
            self.advance();
        }
        if self.peek().is_none() {
            return self.error_token("Unterminated string literal");
        }
        let value = self.input[content_start..self.pos].to_owned();
        self.advance();
        self.make_token(TokenKind::String(value))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return Token::eof(self.pos);
        };

        if c == '`' {
            return self.scan_identifier();
        }
        if is_word_char(c) {
            let len = self.word_len(self.pos);
            let all_digits = self.input[self.pos..self.pos + len]
                .bytes()
                .all(|b| b.is_ascii_digit());
            return if all_digits {
                self.scan_number()
            } else {
                self.scan_identifier()
            };
        }

        self.advance();
        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '?' => self.make_token(TokenKind::Question),
            '=' => self.make_token(TokenKind::Eq),
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.error_token("Unexpected character: !")
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    self.make_token(TokenKind::Concat)
                } else {
                    self.error_token("Unexpected character: |")
                }
            }
            '\'' | '"' => self.scan_string(c),
            other => self.error_token(format!("Unexpected character: {other}")),
        }
    }

    /// Takes the raw text up to the `)` matching an already consumed `(`.
    ///
    /// Nested parentheses are balanced and anything inside quotes is
    /// skipped. On return the lexer sits just past the closing `)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input ends before the group is closed.
    pub fn scan_raw_group(&mut self) -> Result<&'a str, ParseError> {
        let open = self.pos;
        let mut depth = 1usize;

        while let Some(c) = self.advance() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(&self.input[open..self.pos - 1]);
                    }
                }
                '\'' | '"' | '`' => while self.advance().is_some_and(|n| n != c) {},
                _ => {}
            }
        }

        Err(ParseError::unexpected_eof(
            "')' closing the native query",
            Span::point(self.input.len()),
        ))
    }

    /// Tokenizes the whole input, ending with an EOF token.
    ///
    /// # Errors
    ///
    /// Returns a lexical error for the first piece of input that is not a
    /// valid token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if let TokenKind::Error(message) = &token.kind {
                return Err(ParseError::lex(message, &token));
            }
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DialectKind;

    fn lex_with(dialect: DialectKind, input: &str) -> Vec<TokenKind> {
        let grammar = dialect.grammar();
        Lexer::new(input, &grammar)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex(input: &str) -> Vec<TokenKind> {
        lex_with(DialectKind::MindsDb, input)
    }

    fn id(parts: &[&str]) -> TokenKind {
        TokenKind::Identifier(parts.iter().map(|p| (*p).to_string()).collect())
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            lex("SELECT a FROM t"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                id(&["a"]),
                TokenKind::Keyword(Keyword::From),
                id(&["t"]),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            lex("42 3.5 0.25"),
            vec![
                TokenKind::Integer(42),
                TokenKind::Float(3.5),
                TokenKind::Float(0.25),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_word_with_leading_digits_is_identifier() {
        assert_eq!(lex("1abc"), vec![id(&["1abc"]), TokenKind::Eof]);
    }

    #[test]
    fn test_strings_have_no_escapes() {
        assert_eq!(
            lex(r#"'it' "it's""#),
            vec![
                TokenKind::String("it".into()),
                TokenKind::String("it's".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_dotted_and_quoted_identifiers() {
        assert_eq!(
            lex("db.`my table`.col"),
            vec![id(&["db", "my table", "col"]), TokenKind::Eof]
        );
        assert_eq!(lex("`select`"), vec![id(&["select"]), TokenKind::Eof]);
    }

    #[test]
    fn test_keyword_only_when_whole_match_is_one_segment() {
        assert_eq!(lex("select.x"), vec![id(&["select", "x"]), TokenKind::Eof]);
        assert_eq!(lex("fromage"), vec![id(&["fromage"]), TokenKind::Eof]);
    }

    #[test]
    fn test_compound_keywords() {
        assert_eq!(
            lex("group by x order BY y nulls first"),
            vec![
                TokenKind::Keyword(Keyword::GroupBy),
                id(&["x"]),
                TokenKind::Keyword(Keyword::OrderBy),
                id(&["y"]),
                TokenKind::Keyword(Keyword::NullsFirst),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            lex("a IS NOT NULL"),
            vec![
                id(&["a"]),
                TokenKind::Keyword(Keyword::IsNot),
                TokenKind::Keyword(Keyword::Null),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            lex("group x"),
            vec![id(&["group"]), id(&["x"]), TokenKind::Eof]
        );
    }

    #[test]
    fn test_dialect_decides_keywords() {
        assert_eq!(
            lex_with(DialectKind::Sqlite, "show"),
            vec![TokenKind::Keyword(Keyword::Show), TokenKind::Eof]
        );
        assert_eq!(
            lex_with(DialectKind::Sqlite, "describe"),
            vec![id(&["describe"]), TokenKind::Eof]
        );
        assert_eq!(
            lex_with(DialectKind::Sqlite, "cross join"),
            vec![id(&["cross"]), id(&["join"]), TokenKind::Eof]
        );
        assert_eq!(
            lex_with(DialectKind::Mysql, "cross join"),
            vec![TokenKind::Keyword(Keyword::CrossJoin), TokenKind::Eof]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            lex("!= <> <= >= < > = || ? ; %"),
            vec![
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::Concat,
                TokenKind::Question,
                TokenKind::Semicolon,
                TokenKind::Percent,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_token_text_and_span() {
        let grammar = DialectKind::Sqlite.grammar();
        let tokens = Lexer::new("select  Group By", &grammar).tokenize().unwrap();
        assert_eq!(tokens[1].text, "Group By");
        assert_eq!(tokens[1].span, Span::new(8, 16));
        assert_eq!(tokens[2].span, Span::point(16));
    }

    #[test]
    fn test_lex_errors() {
        let grammar = DialectKind::Sqlite.grammar();
        for input in ["'open", "`open", "a # b", "a ! b", "a | b", "a.", "99999999999999999999"] {
            let err = Lexer::new(input, &grammar).tokenize().unwrap_err();
            assert!(err.is_lex(), "{input}: {err}");
        }

        let huge = format!("{}.5", "9".repeat(400));
        let err = Lexer::new(&huge, &grammar).tokenize().unwrap_err();
        assert!(err.is_lex());
        assert!(err.message.contains("Invalid float"), "{err}");
    }

    #[test]
    fn test_scan_raw_group_balances_and_skips_quotes() {
        let grammar = DialectKind::MindsDb.grammar();
        let mut lexer = Lexer::new("(a (b) ')' \"(\" c) tail", &grammar);
        assert_eq!(lexer.next_token().kind, TokenKind::LeftParen);
        assert_eq!(lexer.scan_raw_group().unwrap(), "a (b) ')' \"(\" c");
        assert_eq!(lexer.next_token().kind, id(&["tail"]));

        let mut unclosed = Lexer::new("(a (b)", &grammar);
        let _ = unclosed.next_token();
        assert!(unclosed.scan_raw_group().is_err());
    }
}
