use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::debug;

use argtable::args::{ArgTable, SharedArgs};
use argtable::config::Config;
use argtable::logging::init_tracing;

/// Parse option tokens into an argument table and query it.
#[derive(Parser, Debug)]
#[command(name = "argtable", version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Query NAME as a string (default "")
    #[arg(long = "get", value_name = "NAME", allow_hyphen_values = true)]
    get: Vec<String>,

    /// Query NAME as an integer (default 0)
    #[arg(long = "get-int", value_name = "NAME", allow_hyphen_values = true)]
    get_int: Vec<String>,

    /// Query NAME as a boolean (default false)
    #[arg(long = "get-bool", value_name = "NAME", allow_hyphen_values = true)]
    get_bool: Vec<String>,

    /// Tokens to parse, after `--` (program path not included)
    #[arg(last = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Answer {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(value) => f.write_str(value),
            Answer::Int(value) => write!(f, "{}", value),
            Answer::Bool(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Serialize)]
struct Query {
    name: String,
    value: Answer,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    init_tracing(&config.logging);

    let args = SharedArgs::default();
    args.parse_parameters(&cli.tokens, config.parser.options());
    let table = args.snapshot();
    debug!(
        options = table.values().len(),
        positionals = table.positionals().len(),
        "argument table built"
    );

    let queries = run_queries(&cli, &table);
    let output = match (cli.format, queries.is_empty()) {
        (Format::Text, true) => render_table(&table),
        (Format::Text, false) => render_queries(&queries),
        (Format::Json, true) => serde_json::to_string_pretty(&*table)?,
        (Format::Json, false) => serde_json::to_string_pretty(&queries)?,
    };
    println!("{}", output);

    Ok(())
}

fn run_queries(cli: &Cli, table: &ArgTable) -> Vec<Query> {
    let strings = cli.get.iter().map(|name| Query {
        name: name.clone(),
        value: Answer::Text(table.get_arg(name, "")),
    });
    let ints = cli.get_int.iter().map(|name| Query {
        name: name.clone(),
        value: Answer::Int(table.get_int_arg(name, 0)),
    });
    let bools = cli.get_bool.iter().map(|name| Query {
        name: name.clone(),
        value: Answer::Bool(table.get_bool_arg(name, false)),
    });
    strings.chain(ints).chain(bools).collect()
}

fn render_table(table: &ArgTable) -> String {
    let mut lines: Vec<String> = table
        .values()
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    lines.extend(
        table
            .positionals()
            .iter()
            .map(|token| format!("positional: {}", token)),
    );
    lines.join("\n")
}

fn render_queries(queries: &[Query]) -> String {
    queries
        .iter()
        .map(|query| format!("{}={}", query.name, query.value))
        .collect::<Vec<_>>()
        .join("\n")
}
