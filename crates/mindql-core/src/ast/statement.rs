//! SQL statement AST types.

use super::expression::Identifier;
use super::Node;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderBy {
    /// The column to order by.
    pub field: Identifier,
    /// `None` when neither ASC nor DESC was written.
    pub direction: Option<OrderDirection>,
    pub nulls: Option<NullOrdering>,
}

impl OrderBy {
    /// Orders by `field` with no direction and no null ordering.
    #[must_use]
    pub const fn new(field: Identifier) -> Self {
        Self {
            field,
            direction: None,
            nulls: None,
        }
    }

    #[must_use]
    pub const fn asc(mut self) -> Self {
        self.direction = Some(OrderDirection::Asc);
        self
    }

    #[must_use]
    pub const fn desc(mut self) -> Self {
        self.direction = Some(OrderDirection::Desc);
        self
    }

    #[must_use]
    pub const fn nulls(mut self, nulls: NullOrdering) -> Self {
        self.nulls = Some(nulls);
        self
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JoinType {
    /// INNER JOIN, also used for the implicit comma join.
    Inner,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
    /// FULL JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// Two table references combined by a join.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Join {
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub join_type: JoinType,
    /// True for `FROM a, b`.
    pub implicit: bool,
    /// The `ON` expression, if any.
    pub condition: Option<Box<Node>>,
}

impl Join {
    /// An explicit join without a condition.
    #[must_use]
    pub fn new(join_type: JoinType, left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            join_type,
            implicit: false,
            condition: None,
        }
    }

    /// The comma join `left, right`: an inner join with no condition.
    #[must_use]
    pub fn implicit(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self {
            implicit: true,
            ..Self::new(JoinType::Inner, left, right)
        }
    }

    /// Sets the `ON` condition.
    #[must_use]
    pub fn on(mut self, condition: impl Into<Node>) -> Self {
        self.condition = Some(Box::new(condition.into()));
        self
    }
}

/// A SELECT statement.
///
/// Each optional clause is present at most once; [`Parser`](crate::parser::Parser)
/// enforces clause order and operand types while building it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Select {
    /// Result columns.
    pub targets: Vec<Node>,
    pub distinct: bool,
    /// FROM source: an identifier, a join or a native query.
    pub from_table: Option<Node>,
    pub where_clause: Option<Node>,
    pub group_by: Option<Vec<Identifier>>,
    pub having: Option<Node>,
    pub order_by: Option<Vec<OrderBy>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Select {
    /// Creates a SELECT of `targets` with no clauses.
    #[must_use]
    pub fn new(targets: Vec<Node>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    #[must_use]
    pub fn with_from(mut self, from: impl Into<Node>) -> Self {
        self.from_table = Some(from.into());
        self
    }

    #[must_use]
    pub fn with_where(mut self, condition: impl Into<Node>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    #[must_use]
    pub fn with_group_by(mut self, columns: Vec<Identifier>) -> Self {
        self.group_by = Some(columns);
        self
    }

    #[must_use]
    pub fn with_having(mut self, condition: impl Into<Node>) -> Self {
        self.having = Some(condition.into());
        self
    }

    #[must_use]
    pub fn with_order_by(mut self, terms: Vec<OrderBy>) -> Self {
        self.order_by = Some(terms);
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// A parenthesized query handed verbatim to an external integration,
/// e.g. `int1 (select q from p)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeQuery {
    pub integration: Identifier,
    /// Raw text between the parentheses, trimmed.
    pub query: String,
    pub alias: Option<String>,
}

impl NativeQuery {
    #[must_use]
    pub fn new(integration: Identifier, query: impl Into<String>) -> Self {
        Self {
            integration,
            query: query.into(),
            alias: None,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A SHOW statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Show {
    /// Upper-case category phrase, words separated by one space.
    pub category: String,
    pub from_table: Option<Identifier>,
    /// Pattern of `LIKE '...'`.
    pub like: Option<String>,
    pub where_clause: Option<Box<Node>>,
}

impl Show {
    /// Creates a SHOW of `category`, normalizing case and spacing.
    #[must_use]
    pub fn new(category: &str) -> Self {
        Self {
            category: category
                .split_whitespace()
                .map(str::to_ascii_uppercase)
                .collect::<Vec<_>>()
                .join(" "),
            from_table: None,
            like: None,
            where_clause: None,
        }
    }

    #[must_use]
    pub fn with_from(mut self, table: Identifier) -> Self {
        self.from_table = Some(table);
        self
    }

    #[must_use]
    pub fn with_like(mut self, pattern: impl Into<String>) -> Self {
        self.like = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_where(mut self, condition: impl Into<Node>) -> Self {
        self.where_clause = Some(Box::new(condition.into()));
        self
    }
}

/// `USE database`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Use {
    pub database: Identifier,
}

/// `DESCRIBE target`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Describe {
    pub target: Identifier,
}

/// `EXPLAIN target`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explain {
    pub target: Identifier,
}

/// Transaction control commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionCommand {
    /// START TRANSACTION.
    Start,
    /// COMMIT.
    Commit,
    /// ROLLBACK.
    Rollback,
}

impl TransactionCommand {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "START TRANSACTION",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
        }
    }
}

/// A transaction control statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    pub command: TransactionCommand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_type() {
        assert_eq!(JoinType::Inner.as_str(), "INNER JOIN");
        assert_eq!(JoinType::Cross.as_str(), "CROSS JOIN");
    }

    #[test]
    fn test_implicit_join() {
        let join = Join::implicit(Identifier::from_path("t1"), Identifier::from_path("t2"));
        assert!(join.implicit);
        assert_eq!(join.join_type, JoinType::Inner);
        assert!(join.condition.is_none());
    }

    #[test]
    fn test_show_normalizes_category() {
        assert_eq!(Show::new("full   tables").category, "FULL TABLES");
        assert_eq!(Show::new("Status").category, "STATUS");
    }

    #[test]
    fn test_select_builder() {
        let select = Select::new(vec![Identifier::star().into()])
            .distinct()
            .with_from(Identifier::from_path("t"))
            .with_limit(10)
            .with_offset(5);
        assert!(select.distinct);
        assert_eq!(select.limit, Some(10));
        assert_eq!(select.offset, Some(5));
        assert!(select.where_clause.is_none());
    }

    #[test]
    fn test_order_by_builder() {
        let term = OrderBy::new(Identifier::from_path("a")).desc().nulls(NullOrdering::Last);
        assert_eq!(term.direction, Some(OrderDirection::Desc));
        assert_eq!(term.nulls, Some(NullOrdering::Last));
    }
}
