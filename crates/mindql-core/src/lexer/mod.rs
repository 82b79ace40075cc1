//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer that turns statement text into tokens. Keyword
//! recognition is driven by the active dialect's [`Grammar`](crate::dialect::Grammar),
//! so the same word can be a keyword in one dialect and an identifier in another.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
