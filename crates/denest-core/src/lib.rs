//! # denest-core
//!
//! Whole-document JSON engine: a lexer, a recursive-descent parser that
//! builds an in-memory [`Value`] tree, a pretty-printer that renders the
//! tree back to indented text, and a resolver that recursively decodes
//! string leaves whose content is itself JSON ("nested JSON").
//!
//! ## Quick start
//!
//! ```rust
//! use denest_core::{parse, pretty, resolve_nested};
//!
//! // A document whose "payload" field smuggles JSON inside a string.
//! let value = parse(r#"{"payload":"{\"x\":1}"}"#).unwrap();
//! let value = resolve_nested(value);
//! assert_eq!(value.get("payload").and_then(|p| p.get("x")),
//!            Some(&denest_core::Value::Number(1.0)));
//! assert_eq!(pretty(&value), "{\n  \"payload\": {\n    \"x\": 1\n  }\n}");
//! ```
//!
//! ## Pipeline
//!
//! [`parse`] runs the two front-end phases in sequence:
//!
//! 1. **Lexer**: text → token sequence ([`lexer::tokenize`])
//! 2. **Parser**: tokens → `Value` tree ([`parser::parse`])
//!
//! [`pretty`] and [`resolve_nested`] both operate purely on `Value`
//! trees, independently of each other. Everything is synchronous and
//! single-threaded; each stage finishes before the next starts, and the
//! tree is handed off by ownership between stages.
//!
//! ## Modules
//!
//! - [`lexer`] — tokenizer with escape/number decoding
//! - [`parser`] — recursive descent over the grammar
//! - [`printer`] — indented serialization
//! - [`resolver`] — nested-JSON resolution
//! - [`value`] — the closed `Value` enum
//! - [`error`] — positioned parse errors
//!
//! ## Limits
//!
//! Parsing and resolution recurse to the input's nesting depth, so
//! adversarially deep documents can exhaust the call stack; callers
//! feeding untrusted input should bound document depth or size
//! themselves. `\uXXXX` escapes decode as independent code points with no
//! surrogate-pair joining, and the printer's escape form does not
//! round-trip characters above U+FFFF (see [`lexer`] and [`printer`]).

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod resolver;
pub mod value;

pub use error::{ParseError, Result};
pub use printer::pretty;
pub use resolver::resolve_nested;
pub use value::Value;

/// Parse a JSON document from a string.
///
/// Tokenizes the whole input, then parses exactly one value spanning it.
/// All failures carry the byte offset of the offense.
///
/// # Example
///
/// ```
/// let value = denest_core::parse(r#"[1, "two", null]"#).unwrap();
/// assert_eq!(value.as_array().map(|a| a.len()), Some(3));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    let tokens = lexer::tokenize(input)?;
    parser::parse(tokens)
}
