//! The work behind each subcommand, kept apart from argument parsing.

use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use mindql_core::{parse_sql, DialectKind, Error, Lexer, Node, Render};
use tracing::debug;

/// Reads SQL from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut sql = String::new();
            std::io::stdin()
                .read_to_string(&mut sql)
                .context("failed to read stdin")?;
            Ok(sql)
        }
    }
}

/// Parses one statement under `dialect`.
pub fn parse(sql: &str, dialect: DialectKind) -> Result<Node, Error> {
    parse_sql(sql, dialect.as_str())
}

/// Canonical SQL text.
pub fn format(sql: &str, dialect: DialectKind) -> anyhow::Result<String> {
    Ok(parse(sql, dialect)?.render_to_text())
}

/// Structural dump of the tree.
pub fn tree(sql: &str, dialect: DialectKind) -> anyhow::Result<String> {
    Ok(parse(sql, dialect)?.render_to_tree())
}

/// The tree as pretty-printed JSON.
pub fn json(sql: &str, dialect: DialectKind) -> anyhow::Result<String> {
    let node = parse(sql, dialect)?;
    serde_json::to_string_pretty(&node).context("failed to serialize the tree")
}

/// One token per line: kind, source text and span.
pub fn tokens(sql: &str, dialect: DialectKind) -> anyhow::Result<String> {
    let grammar = dialect.grammar();
    let tokens = Lexer::new(sql, &grammar).tokenize()?;
    debug!(count = tokens.len(), "tokenized");

    let mut out = String::new();
    for token in &tokens {
        writeln!(out, "{} {} {}", token.kind.name(), token.text, token.span)?;
    }
    Ok(out)
}
