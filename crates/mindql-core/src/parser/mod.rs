//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! SELECT clauses are checked for order, prerequisites and operand shape
//! the moment each one is attached.

mod clause;
mod error;
mod parser;
mod pratt;

pub use clause::Clause;
pub use error::{ErrorKind, ParseError, SemanticErrorKind};
pub use parser::{Parser, MAX_NESTING_DEPTH};
