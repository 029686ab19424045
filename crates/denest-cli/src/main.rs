//! `denest` CLI — parse, pretty-print, and unfold nested JSON from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print JSON (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | denest fmt
//!
//! # Pretty-print from file to file
//! denest fmt -i data.json -o data.pretty.json
//!
//! # Unfold JSON smuggled inside string fields, then pretty-print
//! denest resolve -i webhook.json
//!
//! # Validate only; reports the byte offset on failure
//! denest check -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use denest_core::{parse, pretty, resolve_nested, Value};

#[derive(Parser)]
#[command(
    name = "denest",
    version,
    about = "JSON pretty-printer and nested-JSON resolver"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and pretty-print it with two-space indentation
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse JSON, unfold embedded JSON strings, and pretty-print
    Resolve {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate JSON and describe the outermost value
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text)?;
            write_output(output.as_deref(), &pretty(&value))?;
        }
        Commands::Resolve { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = resolve_nested(parse_document(&text)?);
            write_output(output.as_deref(), &pretty(&value))?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text)?;
            println!("OK: {}", describe(&value));
        }
    }

    Ok(())
}

/// Parse the document, wrapping the positioned error with context.
fn parse_document(text: &str) -> Result<Value> {
    parse(text).context("Failed to parse JSON")
}

/// One-line summary of the outermost value for `check`.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(elements) => format!(
            "array with {} {}",
            elements.len(),
            plural(elements.len(), "element")
        ),
        Value::Object(members) => format!(
            "object with {} {}",
            members.len(),
            plural(members.len(), "member")
        ),
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
