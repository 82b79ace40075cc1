//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node renders back to canonical SQL through `Display` and to an
//! indented structural dump through [`Render::render_to_tree`].

mod expression;
mod node;
mod render;
mod statement;
mod tree;

pub use expression::{
    BinaryOp, BinaryOperation, Constant, Function, Identifier, Literal, Parameter, Tuple,
    UnaryOp, UnaryOperation,
};
pub use node::Node;
pub use render::quote_segment;
pub use statement::{
    Describe, Explain, Join, JoinType, NativeQuery, NullOrdering, OrderBy, OrderDirection,
    Select, Show, Transaction, TransactionCommand, Use,
};
pub use tree::{Render, TreeWriter};
