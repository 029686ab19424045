//! Resolver — recursively decode string leaves that hold embedded JSON.
//!
//! APIs routinely smuggle JSON inside JSON: a payload column, a webhook
//! body, a logged request. The resolver walks a parsed tree depth-first
//! and, wherever a string leaf looks like it contains a document of its
//! own, re-parses it in place so the structure becomes visible.
//!
//! The pass is total and pure: it never fails and never loses data. A
//! string that merely *looks* like JSON but does not parse stays exactly
//! as it was — swallowing that reparse failure is the intended
//! best-effort policy, not an oversight.

use crate::value::Value;

/// Resolve embedded JSON strings throughout a value tree.
///
/// Containers have every child resolved. A string leaf is trimmed for
/// sniffing; if the trimmed text starts with `{` or `[`, the *original*
/// untrimmed string is run through the full tokenize-and-parse pipeline
/// (leading whitespace is insignificant there anyway). On success the
/// leaf is replaced by the parsed value, which is itself resolved again
/// so that doubly-encoded payloads unfold all the way down.
///
/// Termination: every successful replacement consumes a finite string and
/// produces a tree bounded by that string's length, so the recursion
/// cannot expand forever, and a failed reparse stops the branch cold.
pub fn resolve_nested(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(key, child)| (key, resolve_nested(child)))
                .collect(),
        ),
        Value::Array(elements) => {
            Value::Array(elements.into_iter().map(resolve_nested).collect())
        }
        Value::String(text) => resolve_string(text),
        other => other,
    }
}

/// Sniff and best-effort reparse a single string leaf.
fn resolve_string(text: String) -> Value {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(parsed) = crate::parse(&text) {
            return resolve_nested(parsed);
        }
    }
    Value::String(text)
}
