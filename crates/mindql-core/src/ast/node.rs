//! The closed set of AST node kinds.

use super::expression::{
    BinaryOperation, Constant, Function, Identifier, Parameter, Tuple, UnaryOperation,
};
use super::statement::{
    Describe, Explain, Join, NativeQuery, OrderBy, Select, Show, Transaction, Use,
};

/// Any node of a parsed statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Identifier(Identifier),
    Constant(Constant),
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
    Function(Function),
    Tuple(Tuple),
    Parameter(Parameter),
    Select(Box<Select>),
    Join(Join),
    OrderBy(OrderBy),
    NativeQuery(NativeQuery),
    Show(Show),
    Use(Use),
    Describe(Describe),
    Explain(Explain),
    Transaction(Transaction),
}

impl Node {
    /// Name of the node kind, as used in tree dumps.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "Identifier",
            Self::Constant(_) => "Constant",
            Self::BinaryOperation(_) => "BinaryOperation",
            Self::UnaryOperation(_) => "UnaryOperation",
            Self::Function(_) => "Function",
            Self::Tuple(_) => "Tuple",
            Self::Parameter(_) => "Parameter",
            Self::Select(_) => "Select",
            Self::Join(_) => "Join",
            Self::OrderBy(_) => "OrderBy",
            Self::NativeQuery(_) => "NativeQuery",
            Self::Show(_) => "Show",
            Self::Use(_) => "Use",
            Self::Describe(_) => "Describe",
            Self::Explain(_) => "Explain",
            Self::Transaction(_) => "Transaction",
        }
    }

    /// The alias slot of nodes that can carry `AS alias`.
    pub fn alias_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            Self::Identifier(n) => Some(&mut n.alias),
            Self::Constant(n) => Some(&mut n.alias),
            Self::BinaryOperation(n) => Some(&mut n.alias),
            Self::UnaryOperation(n) => Some(&mut n.alias),
            Self::Function(n) => Some(&mut n.alias),
            Self::Tuple(n) => Some(&mut n.alias),
            Self::Parameter(n) => Some(&mut n.alias),
            Self::NativeQuery(n) => Some(&mut n.alias),
            Self::Select(_)
            | Self::Join(_)
            | Self::OrderBy(_)
            | Self::Show(_)
            | Self::Use(_)
            | Self::Describe(_)
            | Self::Explain(_)
            | Self::Transaction(_) => None,
        }
    }

    /// Flags an expression as written inside parentheses. Other nodes are
    /// left untouched.
    pub fn set_parentheses(&mut self) {
        match self {
            Self::Identifier(n) => n.parentheses = true,
            Self::Constant(n) => n.parentheses = true,
            Self::BinaryOperation(n) => n.parentheses = true,
            Self::UnaryOperation(n) => n.parentheses = true,
            Self::Function(n) => n.parentheses = true,
            Self::Tuple(n) => n.parentheses = true,
            Self::Parameter(n) => n.parentheses = true,
            _ => {}
        }
    }

    /// Returns true for nodes accepted as a WHERE/HAVING condition.
    #[must_use]
    pub const fn is_operation(&self) -> bool {
        matches!(
            self,
            Self::BinaryOperation(_) | Self::UnaryOperation(_) | Self::Function(_)
        )
    }

    /// Returns the SELECT if this node is one.
    #[must_use]
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    /// Returns the identifier if this node is one.
    #[must_use]
    pub const fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_for_node!(
    Identifier,
    Constant,
    BinaryOperation,
    UnaryOperation,
    Function,
    Tuple,
    Parameter,
    Join,
    OrderBy,
    NativeQuery,
    Show,
    Use,
    Describe,
    Explain,
    Transaction,
);

impl From<Select> for Node {
    fn from(select: Select) -> Self {
        Self::Select(Box::new(select))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Literal};

    #[test]
    fn test_alias_slot() {
        let mut node: Node = Identifier::from_path("a").into();
        *node.alias_mut().unwrap() = Some("b".into());
        assert_eq!(node.as_identifier().unwrap().alias.as_deref(), Some("b"));

        let mut show: Node = Show::new("TABLES").into();
        assert!(show.alias_mut().is_none());
    }

    #[test]
    fn test_set_parentheses() {
        let mut node: Node = Constant::integer(1).into();
        node.set_parentheses();
        assert_eq!(
            node,
            Node::Constant(Constant {
                value: Literal::Integer(1),
                alias: None,
                parentheses: true,
            })
        );
    }

    #[test]
    fn test_is_operation() {
        let eq: Node =
            BinaryOperation::new(BinaryOp::Eq, Identifier::from_path("a"), Constant::integer(1))
                .into();
        assert!(eq.is_operation());
        assert!(Node::from(Function::new("f", vec![])).is_operation());
        assert!(!Node::from(Identifier::from_path("a")).is_operation());
        assert!(!Node::from(Constant::boolean(true)).is_operation());
    }

    #[test]
    fn test_select_is_boxed() {
        let node: Node = Select::new(vec![Identifier::star().into()]).into();
        assert_eq!(node.kind_name(), "Select");
        assert_eq!(node.as_select().unwrap().targets.len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_structure() {
        let node: Node = NativeQuery::new(Identifier::from_path("pg"), "select 1")
            .with_alias("q")
            .into();
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.starts_with("{\"NativeQuery\""), "{json}");
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
