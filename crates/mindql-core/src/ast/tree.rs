//! Indented structural dumps and the rendering capability shared by all nodes.

use std::fmt::{self, Write as _};

use super::expression::{
    BinaryOperation, Constant, Function, Identifier, Parameter, Tuple, UnaryOperation,
};
use super::statement::{
    Describe, Explain, Join, NativeQuery, OrderBy, Select, Show, Transaction, Use,
};
use super::Node;

/// Builds the `Kind key=value` tree dump, two spaces per level.
#[derive(Debug, Default)]
pub struct TreeWriter {
    out: String,
    depth: usize,
}

impl TreeWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current depth.
    pub fn line(&mut self, text: impl fmt::Display) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        let _ = writeln!(self.out, "{text}");
    }

    /// Writes `label:` and the node below it.
    pub fn child<R: Render + ?Sized>(&mut self, label: &str, node: &R) {
        self.line(format_args!("{label}:"));
        self.depth += 1;
        node.write_tree(self);
        self.depth -= 1;
    }

    /// Writes `label:` and each node below it, in order.
    pub fn children<'n, R, I>(&mut self, label: &str, nodes: I)
    where
        R: Render + 'n,
        I: IntoIterator<Item = &'n R>,
    {
        self.line(format_args!("{label}:"));
        self.depth += 1;
        for node in nodes {
            node.write_tree(self);
        }
        self.depth -= 1;
    }

    /// Returns the finished dump.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Text and tree rendering, available on [`Node`] and on every node struct.
pub trait Render: fmt::Display {
    /// Writes this node's structural dump.
    fn write_tree(&self, w: &mut TreeWriter);

    /// Canonical SQL text.
    fn render_to_text(&self) -> String {
        self.to_string()
    }

    /// Structural dump: node kinds, every attribute, children indented.
    fn render_to_tree(&self) -> String {
        let mut w = TreeWriter::new();
        self.write_tree(&mut w);
        w.finish()
    }

    /// Compares tree dumps, so parentheses and aliases count but the
    /// spelling of the input does not.
    fn structural_equals(&self, other: &Self) -> bool {
        self.render_to_tree() == other.render_to_tree()
    }
}

impl Render for Identifier {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "Identifier parts={:?} alias={:?} is_star={} parentheses={}",
            self.parts, self.alias, self.is_star, self.parentheses
        ));
    }
}

impl Render for Constant {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "Constant value={:?} alias={:?} parentheses={}",
            self.value, self.alias, self.parentheses
        ));
    }
}

impl Render for BinaryOperation {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "BinaryOperation op={:?} alias={:?} parentheses={}",
            self.op.as_str(),
            self.alias,
            self.parentheses
        ));
        w.child("left", &*self.left);
        w.child("right", &*self.right);
    }
}

impl Render for UnaryOperation {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "UnaryOperation op={:?} alias={:?} parentheses={}",
            self.op.as_str(),
            self.alias,
            self.parentheses
        ));
        w.child("operand", &*self.operand);
    }
}

impl Render for Function {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "Function name={:?} alias={:?} parentheses={}",
            self.name, self.alias, self.parentheses
        ));
        w.children("args", &self.args);
    }
}

impl Render for Tuple {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "Tuple alias={:?} parentheses={}",
            self.alias, self.parentheses
        ));
        w.children("items", &self.items);
    }
}

impl Render for Parameter {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "Parameter alias={:?} parentheses={}",
            self.alias, self.parentheses
        ));
    }
}

impl Render for Select {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "Select distinct={} limit={:?} offset={:?}",
            self.distinct, self.limit, self.offset
        ));
        w.children("targets", &self.targets);
        if let Some(from) = &self.from_table {
            w.child("from_table", from);
        }
        if let Some(condition) = &self.where_clause {
            w.child("where", condition);
        }
        if let Some(columns) = &self.group_by {
            w.children("group_by", columns);
        }
        if let Some(condition) = &self.having {
            w.child("having", condition);
        }
        if let Some(terms) = &self.order_by {
            w.children("order_by", terms);
        }
    }
}

impl Render for Join {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "Join join_type={:?} implicit={}",
            self.join_type.as_str(),
            self.implicit
        ));
        w.child("left", &*self.left);
        w.child("right", &*self.right);
        if let Some(condition) = &self.condition {
            w.child("condition", &**condition);
        }
    }
}

impl Render for OrderBy {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "OrderBy direction={:?} nulls={:?}",
            self.direction.map(|d| d.as_str()),
            self.nulls.map(|n| n.as_str())
        ));
        w.child("field", &self.field);
    }
}

impl Render for NativeQuery {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "NativeQuery query={:?} alias={:?}",
            self.query, self.alias
        ));
        w.child("integration", &self.integration);
    }
}

impl Render for Show {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!(
            "Show category={:?} like={:?}",
            self.category, self.like
        ));
        if let Some(table) = &self.from_table {
            w.child("from_table", table);
        }
        if let Some(condition) = &self.where_clause {
            w.child("where", &**condition);
        }
    }
}

impl Render for Use {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line("Use");
        w.child("database", &self.database);
    }
}

impl Render for Describe {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line("Describe");
        w.child("target", &self.target);
    }
}

impl Render for Explain {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line("Explain");
        w.child("target", &self.target);
    }
}

impl Render for Transaction {
    fn write_tree(&self, w: &mut TreeWriter) {
        w.line(format_args!("Transaction command={:?}", self.command.as_str()));
    }
}

impl Render for Node {
    fn write_tree(&self, w: &mut TreeWriter) {
        match self {
            Self::Identifier(n) => n.write_tree(w),
            Self::Constant(n) => n.write_tree(w),
            Self::BinaryOperation(n) => n.write_tree(w),
            Self::UnaryOperation(n) => n.write_tree(w),
            Self::Function(n) => n.write_tree(w),
            Self::Tuple(n) => n.write_tree(w),
            Self::Parameter(n) => n.write_tree(w),
            Self::Select(n) => n.write_tree(w),
            Self::Join(n) => n.write_tree(w),
            Self::OrderBy(n) => n.write_tree(w),
            Self::NativeQuery(n) => n.write_tree(w),
            Self::Show(n) => n.write_tree(w),
            Self::Use(n) => n.write_tree(w),
            Self::Describe(n) => n.write_tree(w),
            Self::Explain(n) => n.write_tree(w),
            Self::Transaction(n) => n.write_tree(w),
        }
    }
}
