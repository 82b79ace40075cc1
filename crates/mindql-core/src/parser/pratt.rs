//! Pratt expression parser tables for operator precedence.
//!
//! Lowest to highest: `OR`, `AND`, comparisons (non-associative), additive,
//! multiplicative, then the prefix operators.

use crate::ast::{BinaryOp, UnaryOp};
use crate::lexer::{Keyword, TokenKind};

/// Binding power of unary `-` and `NOT`; tighter than every binary operator.
pub const PREFIX_BINDING_POWER: u8 = 11;

/// How an infix operator groups with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a = b = c` is a syntax error.
    None,
}

/// Binding powers of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfixPower {
    pub left: u8,
    pub right: u8,
    pub associativity: Associativity,
}

impl InfixPower {
    const fn left_assoc(left: u8) -> Self {
        Self {
            left,
            right: left + 1,
            associativity: Associativity::Left,
        }
    }

    const fn non_assoc(left: u8) -> Self {
        Self {
            left,
            right: left + 1,
            associativity: Associativity::None,
        }
    }
}

/// Returns the infix binding power for a token.
///
/// Higher binding power binds tighter. Returns `None` if the token is not an
/// infix operator.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<InfixPower> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some(InfixPower::left_assoc(1)),
        TokenKind::Keyword(Keyword::And) => Some(InfixPower::left_assoc(3)),

        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(
            Keyword::Is | Keyword::IsNot | Keyword::Like | Keyword::In | Keyword::Not,
        ) => Some(InfixPower::non_assoc(5)),

        TokenKind::Plus | TokenKind::Minus | TokenKind::Concat => Some(InfixPower::left_assoc(7)),

        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => {
            Some(InfixPower::left_assoc(9))
        }

        _ => None,
    }
}

/// Converts a token to a binary operator.
#[must_use]
pub const fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Mod),
        TokenKind::Concat => Some(BinaryOp::Concat),
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::Keyword(Keyword::Is) => Some(BinaryOp::Is),
        TokenKind::Keyword(Keyword::IsNot) => Some(BinaryOp::IsNot),
        TokenKind::Keyword(Keyword::Like) => Some(BinaryOp::Like),
        TokenKind::Keyword(Keyword::In) => Some(BinaryOp::In),
        TokenKind::Keyword(Keyword::Not) => Some(BinaryOp::Not),
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        _ => None,
    }
}

/// Converts a token to a unary operator.
#[must_use]
pub const fn token_to_unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Keyword(Keyword::Not) => Some(UnaryOp::Not),
        _ => None,
    }
}
