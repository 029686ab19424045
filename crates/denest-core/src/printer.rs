//! Printer — render a [`Value`] tree back to indented JSON text.
//!
//! Formatting rules:
//!
//! - two-space indent per nesting level, one member or element per line
//! - `,\n` between members, a newline before every closing brace/bracket
//!   (so empty containers render as `{\n\n}`), no newline after the
//!   outermost value
//! - object members print in insertion order, which the parser preserves
//! - strings re-escape `" \ \b \f \n \r \t` to their two-character forms
//!   and any other character outside printable ASCII (0x20-0x7E) as
//!   `\uXXXX` with lowercase hex
//! - numbers use `f64` Display, the shortest decimal form that parses
//!   back to the same double
//!
//! Printing is total over the closed `Value` enum and cannot fail.
//!
//! Characters above U+FFFF produce a `\u` escape with more than four hex
//! digits, which the lexer will not read back as one character; such
//! strings do not round-trip. Non-finite numbers render via Display
//! (`NaN`, `inf`) and are not valid JSON either. Both are inherited
//! limits of the four-digit-escape / double-only design.

use crate::value::Value;

/// Render a value as indented JSON text.
pub fn pretty(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out, 0);
    out
}

fn write_value(value: &Value, out: &mut String, depth: usize) {
    match value {
        Value::Object(members) => {
            let indent = make_indent(depth);
            out.push_str("{\n");
            for (i, (key, child)) in members.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&indent);
                out.push_str("  ");
                write_escaped(key, out);
                out.push_str(": ");
                write_value(child, out, depth + 1);
            }
            out.push('\n');
            out.push_str(&indent);
            out.push('}');
        }
        Value::Array(elements) => {
            let indent = make_indent(depth);
            out.push_str("[\n");
            for (i, child) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&indent);
                out.push_str("  ");
                write_value(child, out, depth + 1);
            }
            out.push('\n');
            out.push_str(&indent);
            out.push(']');
        }
        Value::String(s) => write_escaped(s, out),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
    }
}

/// Write a string as a quoted JSON literal. Keys and values escape the
/// same way; anything outside printable ASCII goes out as `\uXXXX`.
fn write_escaped(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || (c as u32) > 0x7E => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Two spaces per nesting level.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
