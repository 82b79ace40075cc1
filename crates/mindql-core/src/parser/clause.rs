//! SELECT clause bookkeeping: canonical order, prerequisites and operand
//! checks, applied as each clause is attached.

use super::error::{ParseError, SemanticErrorKind};
use crate::ast::{Constant, Identifier, Literal, Node, OrderBy, Select};
use crate::lexer::{Keyword, Span};

/// The optional clauses of a SELECT, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Clause {
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
}

impl Clause {
    /// Canonical clause order.
    pub const ORDER: [Self; 7] = [
        Self::From,
        Self::Where,
        Self::GroupBy,
        Self::Having,
        Self::OrderBy,
        Self::Limit,
        Self::Offset,
    ];

    /// The clause introduced by `keyword`, if any.
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::From => Some(Self::From),
            Keyword::Where => Some(Self::Where),
            Keyword::GroupBy => Some(Self::GroupBy),
            Keyword::Having => Some(Self::Having),
            Keyword::OrderBy => Some(Self::OrderBy),
            Keyword::Limit => Some(Self::Limit),
            Keyword::Offset => Some(Self::Offset),
            _ => None,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::GroupBy => "GROUP BY",
            Self::Having => "HAVING",
            Self::OrderBy => "ORDER BY",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
        }
    }

    /// Clauses that must already be present before this one.
    #[must_use]
    pub const fn prerequisites(&self) -> &'static [Self] {
        match self {
            Self::Where | Self::GroupBy | Self::OrderBy => &[Self::From],
            Self::Having => &[Self::GroupBy],
            Self::From | Self::Limit | Self::Offset => &[],
        }
    }
}

/// Checks that `node` can stand as the condition of `clause`.
///
/// Binary and unary operations and function calls qualify; bare
/// identifiers, constants, tuples and parameters do not.
///
/// # Errors
///
/// Returns a semantic error naming the clause and the rendered operand.
pub fn ensure_condition(clause: &str, node: Node, span: Span) -> Result<Node, ParseError> {
    if node.is_operation() {
        Ok(node)
    } else {
        Err(ParseError::semantic(
            SemanticErrorKind::NonBooleanCondition,
            format!("{clause} must contain an operation that evaluates to a boolean, got: {node}"),
            span,
        ))
    }
}

/// Accumulates a [`Select`] one clause at a time.
///
/// Every setter validates against the clauses seen so far, so the first
/// offending clause in reading order is the one reported.
#[derive(Debug)]
pub struct SelectBuilder {
    select: Select,
}

impl SelectBuilder {
    #[must_use]
    pub fn new(targets: Vec<Node>, distinct: bool) -> Self {
        Self {
            select: Select {
                targets,
                distinct,
                ..Select::default()
            },
        }
    }

    const fn is_set(&self, clause: Clause) -> bool {
        match clause {
            Clause::From => self.select.from_table.is_some(),
            Clause::Where => self.select.where_clause.is_some(),
            Clause::GroupBy => self.select.group_by.is_some(),
            Clause::Having => self.select.having.is_some(),
            Clause::OrderBy => self.select.order_by.is_some(),
            Clause::Limit => self.select.limit.is_some(),
            Clause::Offset => self.select.offset.is_some(),
        }
    }

    /// Rejects a duplicate, a missing prerequisite, or a clause that comes
    /// after one it must precede.
    ///
    /// # Errors
    ///
    /// Returns the semantic error for the first rule broken.
    pub fn ensure_order(&self, clause: Clause, span: Span) -> Result<(), ParseError> {
        let name = clause.as_str();
        if self.is_set(clause) {
            return Err(ParseError::semantic(
                SemanticErrorKind::DuplicateClause,
                format!("Duplicate {name} clause. Only one {name} allowed per SELECT."),
                span,
            ));
        }

        if let Some(missing) = clause
            .prerequisites()
            .iter()
            .find(|required| !self.is_set(**required))
        {
            return Err(ParseError::semantic(
                SemanticErrorKind::MissingPrerequisite,
                format!("{name} requires {}", missing.as_str()),
                span,
            ));
        }

        if let Some(later) = Clause::ORDER
            .iter()
            .filter(|other| **other > clause)
            .find(|other| self.is_set(**other))
        {
            return Err(ParseError::semantic(
                SemanticErrorKind::ClauseOutOfOrder,
                format!("{name} must go after {}", later.as_str()),
                span,
            ));
        }

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a semantic error if FROM cannot be attached here.
    pub fn from_table(mut self, from: Node, span: Span) -> Result<Self, ParseError> {
        self.ensure_order(Clause::From, span)?;
        self.select.from_table = Some(from);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns a semantic error if WHERE is out of order or not an operation.
    pub fn where_clause(mut self, condition: Node, span: Span) -> Result<Self, ParseError> {
        self.ensure_order(Clause::Where, span)?;
        self.select.where_clause = Some(ensure_condition("WHERE", condition, span)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns a semantic error if GROUP BY is out of order or lists
    /// anything but identifiers.
    pub fn group_by(mut self, items: Vec<Node>, span: Span) -> Result<Self, ParseError> {
        self.ensure_order(Clause::GroupBy, span)?;
        let columns = items
            .into_iter()
            .map(|item| match item {
                Node::Identifier(id) => Ok(id),
                other => Err(ParseError::semantic(
                    SemanticErrorKind::NonIdentifierGroupBy,
                    format!("GROUP BY must contain only identifiers, got: {other}"),
                    span,
                )),
            })
            .collect::<Result<Vec<Identifier>, _>>()?;
        self.select.group_by = Some(columns);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns a semantic error if HAVING is out of order or not an operation.
    pub fn having(mut self, condition: Node, span: Span) -> Result<Self, ParseError> {
        self.ensure_order(Clause::Having, span)?;
        self.select.having = Some(ensure_condition("HAVING", condition, span)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns a semantic error if ORDER BY cannot be attached here.
    pub fn order_by(mut self, terms: Vec<OrderBy>, span: Span) -> Result<Self, ParseError> {
        self.ensure_order(Clause::OrderBy, span)?;
        self.select.order_by = Some(terms);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns a semantic error if LIMIT is out of order or not an integer.
    pub fn limit(mut self, value: &Constant, span: Span) -> Result<Self, ParseError> {
        self.ensure_order(Clause::Limit, span)?;
        self.select.limit = Some(integer_operand(Clause::Limit, value, span)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns a semantic error if OFFSET is out of order or not an integer.
    pub fn offset(mut self, value: &Constant, span: Span) -> Result<Self, ParseError> {
        self.ensure_order(Clause::Offset, span)?;
        self.select.offset = Some(integer_operand(Clause::Offset, value, span)?);
        Ok(self)
    }

    /// Finishes the statement.
    #[must_use]
    pub fn build(self) -> Select {
        self.select
    }
}

fn integer_operand(clause: Clause, value: &Constant, span: Span) -> Result<i64, ParseError> {
    match value.value {
        Literal::Integer(n) => Ok(n),
        _ => Err(ParseError::semantic(
            SemanticErrorKind::NonIntegerLimit,
            format!("{} must be an integer value, got: {value}", clause.as_str()),
            span,
        )),
    }
}
