//! Expression AST types.

use super::Node;

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Is,
    IsNot,
    Like,
    In,
    /// Binary `a NOT b`.
    Not,

    // Logical
    And,
    Or,

    // String
    Concat,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::Like => "LIKE",
            Self::In => "IN",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Logical NOT
    Not,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "NOT",
        }
    }
}

/// Adds the `with_alias` / `parenthesized` builders shared by expression nodes.
macro_rules! impl_expression_modifiers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Attaches `AS alias`.
                #[must_use]
                pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
                    self.alias = Some(alias.into());
                    self
                }

                /// Marks the expression as written inside parentheses.
                #[must_use]
                pub const fn parenthesized(mut self) -> Self {
                    self.parentheses = true;
                    self
                }
            }
        )*
    };
}

impl_expression_modifiers!(
    Identifier,
    Constant,
    BinaryOperation,
    UnaryOperation,
    Function,
    Tuple,
    Parameter,
);

/// A dotted name such as `db.table.col`, or the `*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    /// Path segments, without back-quotes.
    pub parts: Vec<String>,
    pub alias: Option<String>,
    /// True for `*`; `parts` is empty then.
    pub is_star: bool,
    pub parentheses: bool,
}

impl Identifier {
    /// Creates an identifier from its segments.
    #[must_use]
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Splits `path` on `.` into segments.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::new(path.split('.'))
    }

    /// The `*` wildcard.
    #[must_use]
    pub fn star() -> Self {
        Self {
            is_star: true,
            ..Self::default()
        }
    }

    /// Returns `outer.self`, putting the segments of `outer` in front.
    #[must_use]
    pub fn qualified_by(mut self, outer: Self) -> Self {
        let mut parts = outer.parts;
        parts.append(&mut self.parts);
        self.parts = parts;
        self
    }

    /// The segments joined with `.`, without any quoting.
    #[must_use]
    pub fn path(&self) -> String {
        if self.is_star {
            return "*".to_owned();
        }
        self.parts.join(".")
    }
}

/// A literal constant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant {
    pub value: Literal,
    pub alias: Option<String>,
    pub parentheses: bool,
}

impl Constant {
    /// Creates a constant holding `value`.
    #[must_use]
    pub const fn new(value: Literal) -> Self {
        Self {
            value,
            alias: None,
            parentheses: false,
        }
    }

    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::new(Literal::Integer(value))
    }

    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::new(Literal::Float(value))
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(Literal::String(value.into()))
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::new(Literal::Boolean(value))
    }

    #[must_use]
    pub const fn null() -> Self {
        Self::new(Literal::Null)
    }
}

/// `left op right`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOperation {
    pub op: BinaryOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub alias: Option<String>,
    pub parentheses: bool,
}

impl BinaryOperation {
    /// Creates a binary operation.
    #[must_use]
    pub fn new(op: BinaryOp, left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            alias: None,
            parentheses: false,
        }
    }
}

/// `-operand` or `NOT operand`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryOperation {
    pub op: UnaryOp,
    pub operand: Box<Node>,
    pub alias: Option<String>,
    pub parentheses: bool,
}

impl UnaryOperation {
    /// Creates a unary operation.
    #[must_use]
    pub fn new(op: UnaryOp, operand: impl Into<Node>) -> Self {
        Self {
            op,
            operand: Box::new(operand.into()),
            alias: None,
            parentheses: false,
        }
    }
}

/// A function call `name(args...)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    /// Function name as written; a dotted name keeps its dots.
    pub name: String,
    pub args: Vec<Node>,
    pub alias: Option<String>,
    pub parentheses: bool,
}

impl Function {
    /// Creates a function call.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            args,
            alias: None,
            parentheses: false,
        }
    }
}

/// Parenthesized expression list, the right-hand side of `IN`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple {
    pub items: Vec<Node>,
    pub alias: Option<String>,
    pub parentheses: bool,
}

impl Tuple {
    /// Creates a tuple of `items`.
    #[must_use]
    pub fn new(items: Vec<Node>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

/// The `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub alias: Option<String>,
    pub parentheses: bool,
}

impl Parameter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
