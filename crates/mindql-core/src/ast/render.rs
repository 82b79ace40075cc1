//! Canonical SQL text for every node.
//!
//! Rendering is deterministic: keywords are upper-case, clauses come out in
//! canonical order and parentheses appear exactly where the parser saw them,
//! so parsing the output again yields the same tree.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use super::expression::{
    BinaryOperation, Constant, Function, Identifier, Literal, Parameter, Tuple, UnaryOp,
    UnaryOperation,
};
use super::statement::{
    Describe, Explain, Join, NativeQuery, OrderBy, Select, Show, Transaction, Use,
};
use super::Node;
use crate::lexer::Keyword;

/// Returns true if `segment` lexes back as the same single identifier
/// segment without back-quotes.
fn is_bare_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !segment.bytes().all(|b| b.is_ascii_digit())
        && !Keyword::from_str(segment).is_some_and(|kw| kw.is_reserved())
        && !Keyword::starts_compound(segment)
}

/// Back-quotes `segment` when it cannot be written bare.
#[must_use]
pub fn quote_segment(segment: &str) -> Cow<'_, str> {
    if is_bare_segment(segment) {
        Cow::Borrowed(segment)
    } else {
        Cow::Owned(format!("`{segment}`"))
    }
}

fn write_path<'s>(f: &mut Formatter<'_>, parts: impl IntoIterator<Item = &'s str>) -> fmt::Result {
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        f.write_str(&quote_segment(part))?;
    }
    Ok(())
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt(f)?;
    }
    Ok(())
}

fn write_alias(f: &mut Formatter<'_>, alias: Option<&str>) -> fmt::Result {
    match alias {
        Some(alias) => write!(f, " AS {}", quote_segment(alias)),
        None => Ok(()),
    }
}

/// Writes `body`, wrapped in parentheses when the parser saw them, followed
/// by the alias.
fn write_expression(
    f: &mut Formatter<'_>,
    parentheses: bool,
    alias: Option<&str>,
    body: impl FnOnce(&mut Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    if parentheses {
        f.write_str("(")?;
    }
    body(f)?;
    if parentheses {
        f.write_str(")")?;
    }
    write_alias(f, alias)
}

fn write_string(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    let quote = if value.contains('\'') { '"' } else { '\'' };
    write!(f, "{quote}{value}{quote}")
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write_string(f, s),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Null => f.write_str("NULL"),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, self.parentheses, self.alias.as_deref(), |f| {
            if self.is_star {
                f.write_str("*")
            } else {
                write_path(f, self.parts.iter().map(String::as_str))
            }
        })
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, self.parentheses, self.alias.as_deref(), |f| {
            self.value.fmt(f)
        })
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, self.parentheses, self.alias.as_deref(), |f| {
            write!(f, "{} {} {}", self.left, self.op.as_str(), self.right)
        })
    }
}

impl Display for UnaryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, self.parentheses, self.alias.as_deref(), |f| {
            match self.op {
                UnaryOp::Neg => write!(f, "-{}", self.operand),
                UnaryOp::Not => write!(f, "NOT {}", self.operand),
            }
        })
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, self.parentheses, self.alias.as_deref(), |f| {
            write_path(f, self.name.split('.'))?;
            f.write_str("(")?;
            write_list(f, &self.args)?;
            f.write_str(")")
        })
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, self.parentheses, self.alias.as_deref(), |f| {
            f.write_str("(")?;
            write_list(f, &self.items)?;
            f.write_str(")")
        })
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, self.parentheses, self.alias.as_deref(), |f| {
            f.write_str("?")
        })
    }
}

impl Display for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        write_list(f, &self.targets)?;
        if let Some(from) = &self.from_table {
            write!(f, " FROM {from}")?;
        }
        if let Some(condition) = &self.where_clause {
            write!(f, " WHERE {condition}")?;
        }
        if let Some(columns) = &self.group_by {
            f.write_str(" GROUP BY ")?;
            write_list(f, columns)?;
        }
        if let Some(condition) = &self.having {
            write!(f, " HAVING {condition}")?;
        }
        if let Some(terms) = &self.order_by {
            f.write_str(" ORDER BY ")?;
            write_list(f, terms)?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

impl Display for Join {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.implicit {
            return write!(f, "{}, {}", self.left, self.right);
        }
        write!(f, "{} {} {}", self.left, self.join_type.as_str(), self.right)?;
        if let Some(condition) = &self.condition {
            write!(f, " ON {condition}")?;
        }
        Ok(())
    }
}

impl Display for OrderBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.field.fmt(f)?;
        if let Some(direction) = self.direction {
            write!(f, " {}", direction.as_str())?;
        }
        if let Some(nulls) = self.nulls {
            write!(f, " {}", nulls.as_str())?;
        }
        Ok(())
    }
}

impl Display for NativeQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.integration, self.query)?;
        write_alias(f, self.alias.as_deref())
    }
}

impl Display for Show {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SHOW {}", self.category)?;
        if let Some(table) = &self.from_table {
            write!(f, " FROM {table}")?;
        }
        if let Some(pattern) = &self.like {
            f.write_str(" LIKE ")?;
            write_string(f, pattern)?;
        }
        if let Some(condition) = &self.where_clause {
            write!(f, " WHERE {condition}")?;
        }
        Ok(())
    }
}

impl Display for Use {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "USE {}", self.database)
    }
}

impl Display for Describe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DESCRIBE {}", self.target)
    }
}

impl Display for Explain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "EXPLAIN {}", self.target)
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.command.as_str())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(n) => n.fmt(f),
            Self::Constant(n) => n.fmt(f),
            Self::BinaryOperation(n) => n.fmt(f),
            Self::UnaryOperation(n) => n.fmt(f),
            Self::Function(n) => n.fmt(f),
            Self::Tuple(n) => n.fmt(f),
            Self::Parameter(n) => n.fmt(f),
            Self::Select(n) => n.fmt(f),
            Self::Join(n) => n.fmt(f),
            Self::OrderBy(n) => n.fmt(f),
            Self::NativeQuery(n) => n.fmt(f),
            Self::Show(n) => n.fmt(f),
            Self::Use(n) => n.fmt(f),
            Self::Describe(n) => n.fmt(f),
            Self::Explain(n) => n.fmt(f),
            Self::Transaction(n) => n.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, JoinType, NullOrdering};

    #[test]
    fn test_quote_segment() {
        assert_eq!(quote_segment("col_1"), "col_1");
        assert_eq!(quote_segment("status"), "status");
        assert_eq!(quote_segment("my table"), "`my table`");
        assert_eq!(quote_segment("123"), "`123`");
        assert_eq!(quote_segment("select"), "`select`");
        assert_eq!(quote_segment("group"), "`group`");
    }

    #[test]
    fn test_literals() {
        assert_eq!(Literal::Integer(7).to_string(), "7");
        assert_eq!(Literal::Float(3.0).to_string(), "3.0");
        assert_eq!(Literal::Float(0.25).to_string(), "0.25");
        assert_eq!(Literal::String("abc".into()).to_string(), "'abc'");
        assert_eq!(Literal::String("it's".into()).to_string(), "\"it's\"");
        assert_eq!(Literal::Null.to_string(), "NULL");
        assert_eq!(Literal::Boolean(false).to_string(), "FALSE");
    }

    #[test]
    fn test_expression_with_parentheses_and_alias() {
        let sum = BinaryOperation::new(
            BinaryOp::Add,
            Identifier::from_path("a"),
            Constant::integer(1),
        )
        .parenthesized()
        .with_alias("total");
        assert_eq!(sum.to_string(), "(a + 1) AS total");
    }

    #[test]
    fn test_identifier_path_quoting() {
        let id = Identifier::new(["db", "my table", "select"]);
        assert_eq!(id.to_string(), "db.`my table`.`select`");
        assert_eq!(Identifier::star().to_string(), "*");
    }

    #[test]
    fn test_select_clause_order() {
        let select = Select::new(vec![Identifier::from_path("c").into()])
            .with_offset(1)
            .with_limit(5)
            .with_order_by(vec![OrderBy::new(Identifier::from_path("c"))
                .asc()
                .nulls(NullOrdering::First)])
            .with_from(Join::implicit(
                Identifier::from_path("t1"),
                Identifier::from_path("t2"),
            ));
        assert_eq!(
            select.to_string(),
            "SELECT c FROM t1, t2 ORDER BY c ASC NULLS FIRST LIMIT 5 OFFSET 1"
        );
    }

    #[test]
    fn test_join_with_condition() {
        let join = Join::new(
            JoinType::Left,
            Identifier::from_path("t1"),
            Identifier::from_path("t2"),
        )
        .on(BinaryOperation::new(
            BinaryOp::Eq,
            Identifier::from_path("t1.x"),
            Identifier::from_path("t2.y"),
        ));
        assert_eq!(join.to_string(), "t1 LEFT JOIN t2 ON t1.x = t2.y");
    }

    #[test]
    fn test_show_and_utility_statements() {
        let show = Show::new("full columns")
            .with_from(Identifier::from_path("files.concrete"))
            .with_like("c%");
        assert_eq!(show.to_string(), "SHOW FULL COLUMNS FROM files.concrete LIKE 'c%'");
        assert_eq!(
            Use { database: Identifier::from_path("mindsdb") }.to_string(),
            "USE mindsdb"
        );
    }

    #[test]
    fn test_native_query() {
        let query = NativeQuery::new(Identifier::from_path("int1"), "select q from p").with_alias("x");
        assert_eq!(query.to_string(), "int1 (select q from p) AS x");
    }
}
