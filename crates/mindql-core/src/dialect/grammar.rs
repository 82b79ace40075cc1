//! The merged keyword and production tables the lexer and parser consult.

use std::collections::HashSet;

use super::{Dialect, StatementRule, TableFactorRule};
use crate::ast::JoinType;
use crate::lexer::Keyword;

/// Keywords every dialect shares.
const BASE_KEYWORDS: &[Keyword] = &[
    Keyword::Select,
    Keyword::Distinct,
    Keyword::From,
    Keyword::Where,
    Keyword::GroupBy,
    Keyword::Having,
    Keyword::OrderBy,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::As,
    Keyword::On,
    Keyword::Asc,
    Keyword::Desc,
    Keyword::NullsFirst,
    Keyword::NullsLast,
    Keyword::And,
    Keyword::Or,
    Keyword::Not,
    Keyword::Is,
    Keyword::IsNot,
    Keyword::In,
    Keyword::Like,
    Keyword::Null,
    Keyword::True,
    Keyword::False,
];

const BASE_JOIN_TYPES: &[JoinType] = &[
    JoinType::Inner,
    JoinType::Left,
    JoinType::Right,
    JoinType::Full,
];

/// The keyword that spells `join_type`.
const fn join_keyword(join_type: JoinType) -> Keyword {
    match join_type {
        JoinType::Inner => Keyword::InnerJoin,
        JoinType::Left => Keyword::LeftJoin,
        JoinType::Right => Keyword::RightJoin,
        JoinType::Full => Keyword::FullJoin,
        JoinType::Cross => Keyword::CrossJoin,
    }
}

/// Base grammar merged with one dialect's extensions.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: &'static str,
    keywords: HashSet<Keyword>,
    statements: Vec<StatementRule>,
    table_factors: Vec<TableFactorRule>,
    join_types: Vec<JoinType>,
}

impl Grammar {
    /// Merges the base tables with `dialect`'s extensions.
    ///
    /// Statement keywords and join keywords of the dialect are added to the
    /// keyword table automatically.
    #[must_use]
    pub fn new(dialect: &dyn Dialect) -> Self {
        let mut keywords: HashSet<Keyword> = BASE_KEYWORDS.iter().copied().collect();
        keywords.extend(dialect.keywords());

        let statements = dialect.statements();
        keywords.extend(statements.iter().map(|rule| rule.keyword));

        let mut join_types = BASE_JOIN_TYPES.to_vec();
        for join_type in dialect.join_types() {
            if !join_types.contains(&join_type) {
                join_types.push(join_type);
            }
        }
        keywords.extend(join_types.iter().map(|jt| join_keyword(*jt)));

        let table_factors = dialect.table_factors();

        tracing::trace!(
            dialect = dialect.name(),
            keywords = keywords.len(),
            statements = statements.len(),
            table_factors = table_factors.len(),
            join_types = join_types.len(),
            "merged grammar"
        );

        Self {
            name: dialect.name(),
            keywords,
            statements,
            table_factors,
            join_types,
        }
    }

    /// Name of the dialect this grammar was built from.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up a single-word keyword active in this grammar.
    #[must_use]
    pub fn keyword(&self, word: &str) -> Option<Keyword> {
        Keyword::from_str(word).filter(|kw| self.keywords.contains(kw))
    }

    /// Looks up a two-word keyword active in this grammar.
    #[must_use]
    pub fn compound_keyword(&self, first: &str, second: &str) -> Option<Keyword> {
        Keyword::compound(first, second).filter(|kw| self.keywords.contains(kw))
    }

    /// The statement production introduced by `keyword`, if any.
    #[must_use]
    pub fn statement_rule(&self, keyword: Keyword) -> Option<&StatementRule> {
        self.statements.iter().find(|rule| rule.keyword == keyword)
    }

    /// Table factor productions, in the order they are tried.
    #[must_use]
    pub fn table_factors(&self) -> &[TableFactorRule] {
        &self.table_factors
    }

    /// The join type spelled by `keyword`, if this grammar supports it.
    #[must_use]
    pub fn join_type(&self, keyword: Keyword) -> Option<JoinType> {
        self.join_types
            .iter()
            .copied()
            .find(|jt| join_keyword(*jt) == keyword)
    }
}
