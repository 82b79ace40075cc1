//! mindql CLI
//!
//! Parses a single SQL statement and prints it back as canonical text, a
//! structural tree, JSON or the raw token stream.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use mindql_core::DialectKind;

/// Round-trippable SQL parser with MindsDB extensions.
#[derive(Parser)]
#[command(name = "mindql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL dialect: sqlite, mysql or mindsdb.
    #[arg(short, long, env = "MINDQL_DIALECT", default_value = "mindsdb")]
    dialect: DialectKind,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// SQL file to read (stdin if not specified).
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statement as canonical SQL.
    Format(Input),

    /// Print the structural tree of the statement.
    Tree(Input),

    /// Print the statement tree as JSON.
    Json(Input),

    /// Print one token per line.
    Tokens(Input),

    /// Check that the statement parses.
    Check(Input),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = cli.dialect;
    let output = match cli.command {
        Commands::Format(input) => commands::format(&read(&input)?, dialect)?,
        Commands::Tree(input) => commands::tree(&read(&input)?, dialect)?,
        Commands::Json(input) => commands::json(&read(&input)?, dialect)?,
        Commands::Tokens(input) => commands::tokens(&read(&input)?, dialect)?,
        Commands::Check(input) => {
            let sql = read(&input)?;
            return Ok(match commands::parse(&sql, dialect) {
                Ok(_) => {
                    println!("ok");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    println!("{err}");
                    ExitCode::FAILURE
                }
            });
        }
    };

    println!("{}", output.trim_end());
    Ok(ExitCode::SUCCESS)
}

fn read(input: &Input) -> anyhow::Result<String> {
    let sql = commands::read_input(input.file.as_deref())?;
    debug!(bytes = sql.len(), "read statement");
    Ok(sql)
}
