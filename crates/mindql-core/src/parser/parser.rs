//! SQL Parser implementation.

use super::clause::{ensure_condition, Clause, SelectBuilder};
use super::error::ParseError;
use super::pratt::{
    infix_binding_power, token_to_binary_op, token_to_unary_op, Associativity,
    PREFIX_BINDING_POWER,
};
use crate::ast::{
    BinaryOp, BinaryOperation, Constant, Function, Identifier, Join, JoinType, Node,
    NullOrdering, OrderBy, Parameter, Select, Tuple, UnaryOperation,
};
use crate::dialect::Grammar;
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// Deepest tree accepted before the parser gives up with a syntax error.
/// Parentheses, prefix operators, binary operator chains and join chains
/// all count.
pub const MAX_NESTING_DEPTH: usize = 256;

/// SQL Parser.
///
/// Recursive descent for statements, Pratt parsing for expressions. Tokens
/// are pulled from the lexer one at a time, so dialect productions may hand
/// raw input to [`Parser::capture_parenthesized`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    grammar: &'a Grammar,
    current: Token,
    /// Depth of the tree under construction.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str, grammar: &'a Grammar) -> Self {
        let mut lexer = Lexer::new(input, grammar);
        let current = lexer.next_token();
        Self {
            lexer,
            grammar,
            current,
            depth: 0,
        }
    }

    /// The merged grammar this parser consults.
    #[must_use]
    pub const fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    /// The token under the cursor.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Parses a single SQL statement, optionally terminated by `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid statement of the
    /// active grammar, or if anything follows it.
    pub fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let statement = match self.current.as_keyword() {
            Some(Keyword::Select) => Node::from(self.parse_select()?),
            Some(keyword) => {
                let Some(rule) = self.grammar.statement_rule(keyword).copied() else {
                    return Err(self.unexpected("statement"));
                };
                (rule.parse)(self)?
            }
            None => return Err(self.unexpected("statement")),
        };

        self.eat(&TokenKind::Semicolon);
        if !self.current.is_eof() {
            return Err(self.unexpected("end of statement"));
        }
        Ok(statement)
    }

    /// Parses a SELECT statement, attaching each clause as it is read.
    fn parse_select(&mut self) -> Result<Select, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let distinct = self.eat_keyword(Keyword::Distinct);
        let targets = self.parse_targets()?;

        let mut select = SelectBuilder::new(targets, distinct);
        while let Some(clause) = self.current.as_keyword().and_then(Clause::from_keyword) {
            let span = self.advance().span;
            select = match clause {
                Clause::From => {
                    let from = self.parse_from()?;
                    select.from_table(from, span)?
                }
                Clause::Where => {
                    let condition = self.parse_expression(0)?;
                    select.where_clause(condition, span)?
                }
                Clause::GroupBy => {
                    let items = self.parse_expression_list()?;
                    select.group_by(items, span)?
                }
                Clause::Having => {
                    let condition = self.parse_expression(0)?;
                    select.having(condition, span)?
                }
                Clause::OrderBy => {
                    let terms = self.parse_order_by_list()?;
                    select.order_by(terms, span)?
                }
                Clause::Limit => {
                    let value = self.parse_constant()?;
                    select.limit(&value, span)?
                }
                Clause::Offset => {
                    let value = self.parse_constant()?;
                    select.offset(&value, span)?
                }
            };
        }

        Ok(select.build())
    }

    /// Parses the result columns, each with an optional alias.
    fn parse_targets(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut targets = Vec::new();
        loop {
            let mut target = self.parse_expression(0)?;
            self.parse_optional_alias(&mut target)?;
            targets.push(target);
            if !self.eat(&TokenKind::Comma) {
                return Ok(targets);
            }
        }
    }

    /// Parses the FROM operand: table factors chained left-deep by commas and
    /// join keywords.
    fn parse_from(&mut self) -> Result<Node, ParseError> {
        let depth = self.depth;
        let result = self.parse_join_chain();
        self.depth = depth;
        result
    }

    /// Each join wraps everything to its left, so every link counts as one
    /// level of nesting.
    fn parse_join_chain(&mut self) -> Result<Node, ParseError> {
        let mut from = self.parse_table_factor()?;
        loop {
            if self.eat(&TokenKind::Comma) {
                self.descend()?;
                let right = self.parse_table_factor()?;
                from = Join::implicit(from, right).into();
                continue;
            }

            let Some(join_type) = self
                .current
                .as_keyword()
                .and_then(|kw| self.grammar.join_type(kw))
            else {
                return Ok(from);
            };
            self.advance();
            self.descend()?;
            let right = self.parse_table_factor()?;
            let mut join = Join::new(join_type, from, right);
            if join_type != JoinType::Cross && self.eat_keyword(Keyword::On) {
                join = join.on(self.parse_expression(0)?);
            }
            from = join.into();
        }
    }

    /// Parses a table name, or a dialect table factor written `name (...)`,
    /// followed by an optional alias.
    fn parse_table_factor(&mut self) -> Result<Node, ParseError> {
        let name = self.parse_identifier()?;

        let mut factor = None;
        if self.check(&TokenKind::LeftParen) {
            let grammar = self.grammar;
            for rule in grammar.table_factors() {
                if let Some(node) = (rule.parse)(self, &name)? {
                    tracing::trace!(rule = rule.name, "table factor matched");
                    factor = Some(node);
                    break;
                }
            }
        }

        let mut factor = factor.unwrap_or_else(|| name.into());
        self.parse_optional_alias(&mut factor)?;
        Ok(factor)
    }

    /// Parses `AS alias` and stores it on `node`, if the cursor is on `AS`.
    ///
    /// # Errors
    ///
    /// Returns an error if `node` cannot carry an alias or no alias name
    /// follows `AS`.
    pub fn parse_optional_alias(&mut self, node: &mut Node) -> Result<(), ParseError> {
        if !self.check_keyword(Keyword::As) {
            return Ok(());
        }
        let Some(slot) = node.alias_mut() else {
            return Err(self.unexpected("end of table reference"));
        };
        self.advance();
        *slot = Some(self.parse_alias_name()?);
        Ok(())
    }

    /// An alias is an identifier, dotted parts joined with `.`, or a
    /// non-reserved keyword as written.
    fn parse_alias_name(&mut self) -> Result<String, ParseError> {
        let name = match &self.current.kind {
            TokenKind::Identifier(parts) => parts.join("."),
            TokenKind::Keyword(kw) if !kw.is_reserved() => self.current.text.clone(),
            _ => return Err(self.unexpected("alias")),
        };
        self.advance();
        Ok(name)
    }

    /// Parses a dotted name. A non-reserved keyword is accepted as a
    /// one-segment name.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not on a name.
    pub fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let identifier = match &self.current.kind {
            TokenKind::Identifier(parts) => Identifier::new(parts.clone()),
            TokenKind::Keyword(kw) if !kw.is_reserved() => {
                Identifier::new([self.current.text.clone()])
            }
            _ => return Err(self.unexpected("identifier")),
        };
        self.advance();
        Ok(identifier)
    }

    /// Parses a condition and checks it is an operation.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for a malformed expression, or a semantic
    /// error naming `clause` if the expression is not an operation.
    pub fn parse_condition(&mut self, clause: &str) -> Result<Node, ParseError> {
        let span = self.current.span;
        let condition = self.parse_expression(0)?;
        ensure_condition(clause, condition, span)
    }

    /// Parses ORDER BY terms.
    fn parse_order_by_list(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        let mut terms = Vec::new();
        loop {
            let mut term = OrderBy::new(self.parse_identifier()?);

            if self.eat_keyword(Keyword::Asc) {
                term = term.asc();
            } else if self.eat_keyword(Keyword::Desc) {
                term = term.desc();
            }

            if self.eat_keyword(Keyword::NullsFirst) {
                term = term.nulls(NullOrdering::First);
            } else if self.eat_keyword(Keyword::NullsLast) {
                term = term.nulls(NullOrdering::Last);
            }

            terms.push(term);
            if !self.eat(&TokenKind::Comma) {
                return Ok(terms);
            }
        }
    }

    /// Parses an expression using Pratt parsing.
    ///
    /// Operators binding looser than `min_bp` are left for the caller.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for a malformed or too deeply nested
    /// expression, or for chained non-associative operators.
    pub fn parse_expression(&mut self, min_bp: u8) -> Result<Node, ParseError> {
        let depth = self.depth;
        let result = self.descend().and_then(|()| self.parse_infix(min_bp));
        self.depth = depth;
        result
    }

    /// Counts one more level of tree depth, failing past
    /// [`MAX_NESTING_DEPTH`]. Callers restore the depth when they return.
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::nesting_too_deep(
                MAX_NESTING_DEPTH,
                self.current.span,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_infix(&mut self, min_bp: u8) -> Result<Node, ParseError> {
        let mut lhs = self.parse_prefix()?;
        // Left power of the last non-associative operator at this level.
        let mut last_non_assoc = None;

        while let Some(power) = infix_binding_power(&self.current.kind) {
            if power.left < min_bp {
                break;
            }
            if power.associativity == Associativity::None {
                if last_non_assoc == Some(power.left) {
                    return Err(self.unexpected("end of comparison"));
                }
                last_non_assoc = Some(power.left);
            }
            let Some(mut op) = token_to_binary_op(&self.current.kind) else {
                break;
            };
            self.advance();
            // `IS` and `NOT` split by more than one space.
            if op == BinaryOp::Is && self.eat_keyword(Keyword::Not) {
                op = BinaryOp::IsNot;
            }
            // Left-deep chains grow the tree without recursing.
            self.descend()?;

            let rhs = if op == BinaryOp::In && self.check(&TokenKind::LeftParen) {
                self.parse_tuple()?
            } else {
                self.parse_expression(power.right)?
            };
            lhs = BinaryOperation::new(op, lhs, rhs).into();
        }

        Ok(lhs)
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Node, ParseError> {
        if let Some(op) = token_to_unary_op(&self.current.kind) {
            self.advance();
            let operand = self.parse_expression(PREFIX_BINDING_POWER)?;
            return Ok(UnaryOperation::new(op, operand).into());
        }
        self.parse_primary()
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        if let Some(constant) = self.current_constant() {
            self.advance();
            return Ok(constant.into());
        }

        match &self.current.kind {
            TokenKind::Question => {
                self.advance();
                Ok(Parameter::new().into())
            }
            TokenKind::Star => {
                self.advance();
                Ok(Identifier::star().into())
            }
            TokenKind::LeftParen => {
                self.advance();
                let mut inner = self.parse_expression(0)?;
                self.expect(&TokenKind::RightParen)?;
                inner.set_parentheses();
                Ok(inner)
            }
            TokenKind::Identifier(_) => self.parse_name_or_call(),
            TokenKind::Keyword(kw) if !kw.is_reserved() => self.parse_name_or_call(),
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses a column reference, or a function call if `(` follows the name.
    fn parse_name_or_call(&mut self) -> Result<Node, ParseError> {
        let name = self.parse_identifier()?;
        if !self.eat(&TokenKind::LeftParen) {
            return Ok(name.into());
        }
        let args = if self.check(&TokenKind::RightParen) {
            Vec::new()
        } else {
            self.parse_expression_list()?
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Function::new(name.path(), args).into())
    }

    /// Parses the parenthesized right operand of `IN`.
    fn parse_tuple(&mut self) -> Result<Node, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let items = self.parse_expression_list()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Tuple::new(items).into())
    }

    /// Parses a comma-separated list of expressions.
    ///
    /// # Errors
    ///
    /// Returns an error if any item is not a valid expression.
    pub fn parse_expression_list(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut items = vec![self.parse_expression(0)?];
        while self.eat(&TokenKind::Comma) {
            items.push(self.parse_expression(0)?);
        }
        Ok(items)
    }

    /// The literal under the cursor, if it is one.
    fn current_constant(&self) -> Option<Constant> {
        match &self.current.kind {
            TokenKind::Integer(n) => Some(Constant::integer(*n)),
            TokenKind::Float(v) => Some(Constant::float(*v)),
            TokenKind::String(s) => Some(Constant::string(s.clone())),
            TokenKind::Keyword(Keyword::Null) => Some(Constant::null()),
            TokenKind::Keyword(Keyword::True) => Some(Constant::boolean(true)),
            TokenKind::Keyword(Keyword::False) => Some(Constant::boolean(false)),
            _ => None,
        }
    }

    fn parse_constant(&mut self) -> Result<Constant, ParseError> {
        let constant = self
            .current_constant()
            .ok_or_else(|| self.unexpected("constant"))?;
        self.advance();
        Ok(constant)
    }

    /// Takes the raw text of the parenthesized group under the cursor,
    /// trimmed, without tokenizing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not on `(` or the group is never
    /// closed.
    pub fn capture_parenthesized(&mut self) -> Result<&'a str, ParseError> {
        if !self.check(&TokenKind::LeftParen) {
            return Err(self.unexpected(TokenKind::LeftParen.name()));
        }
        let raw = self.lexer.scan_raw_group()?;
        self.advance();
        Ok(raw.trim())
    }

    // --- Helper methods ---

    /// Advances to the next token, returning the one left behind.
    pub fn advance(&mut self) -> Token {
        std::mem::replace(&mut self.current, self.lexer.next_token())
    }

    /// Checks if the current token matches the given kind.
    #[must_use]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    #[must_use]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.as_keyword() == Some(keyword)
    }

    /// Consumes the current token if it matches the given kind.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind.
    ///
    /// # Errors
    ///
    /// Returns a syntax error naming the expected token.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    /// Expects the current token to be the given keyword.
    ///
    /// # Errors
    ///
    /// Returns a syntax error naming the keyword.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// A syntax error at the current token.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(expected, &self.current)
    }
}
